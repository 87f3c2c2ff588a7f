//! Settings screen: edit the profile, change the password.
//!
//! The profile form only sends the fields that actually changed; the server
//! stays the authority on what was accepted. A successful rename also
//! refreshes the stored session so the rest of the app picks it up.

use lampunggo_shared::{UpdateProfileRequest, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::ArrowLeftIcon;
use crate::api::WisataApi;
use crate::auth::{apply_profile_update, use_auth};
use crate::web::router::Link;
use crate::web::use_sequencer;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = expect_context::<WisataApi>();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (orig_name, set_orig_name) = signal(String::new());
    let (orig_email, set_orig_email) = signal(String::new());

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let (loading_user, set_loading_user) = signal(true);
    let (saving, set_saving) = signal(false);
    // Toast content and error flag.
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    // Authoritative profile from the server, not the cached session.
    let sequencer = use_sequencer();
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let ticket = sequencer.begin();
            set_loading_user.set(true);
            spawn_local(async move {
                let result = api.fetch_user().await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(user) => {
                        set_name.set(user.name.clone());
                        set_email.set(user.email.clone());
                        set_orig_name.set(user.name);
                        set_orig_email.set(user.email);
                    }
                    Err(err) => {
                        let copy = err
                            .backend_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| {
                                "Terjadi kesalahan saat memuat data profil.".to_string()
                            });
                        set_notification.set(Some((copy, true)));
                    }
                }
                set_loading_user.set(false);
            });
        }
    });

    let stored_api = StoredValue::new(api);
    let on_save_profile = {
        move |_| {
            let new_name = name.get_untracked().trim().to_string();
            let new_email = email.get_untracked().trim().to_string();

            if new_name.is_empty() || new_email.is_empty() {
                set_notification
                    .set(Some(("Nama dan email tidak boleh kosong.".to_string(), true)));
                return;
            }

            let mut payload = UpdateProfileRequest::default();
            if new_name != orig_name.get_untracked() {
                payload.name = Some(new_name.clone());
            }
            if new_email != orig_email.get_untracked() {
                payload.email = Some(new_email.clone());
            }
            if payload.is_empty() {
                set_notification.set(Some((
                    "Tidak ada perubahan yang perlu disimpan.".to_string(),
                    false,
                )));
                return;
            }

            let api = stored_api.get_value();
            set_saving.set(true);
            spawn_local(async move {
                match api.update_profile(&payload).await {
                    Ok(_) => {
                        set_orig_name.set(new_name.clone());
                        set_orig_email.set(new_email.clone());
                        apply_profile_update(
                            &auth_ctx,
                            &api,
                            &User {
                                name: new_name,
                                email: new_email,
                            },
                        );
                        set_notification
                            .set(Some(("Profil berhasil diperbarui.".to_string(), false)));
                    }
                    Err(err) => {
                        let copy = err
                            .backend_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| "Gagal memperbarui profil.".to_string());
                        set_notification.set(Some((copy, true)));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let on_change_password = {
        move |_| {
            let current = current_password.get_untracked();
            let fresh = new_password.get_untracked();
            let confirm = confirm_password.get_untracked();

            if current.is_empty() || fresh.is_empty() || confirm.is_empty() {
                set_notification
                    .set(Some(("Semua kolom kata sandi wajib diisi.".to_string(), true)));
                return;
            }
            if fresh != confirm {
                set_notification.set(Some((
                    "Kata sandi baru dan konfirmasi tidak sama.".to_string(),
                    true,
                )));
                return;
            }

            let payload = UpdateProfileRequest {
                password: Some(current),
                new_password: Some(fresh),
                new_password_confirmation: Some(confirm),
                ..Default::default()
            };

            let api = stored_api.get_value();
            set_saving.set(true);
            spawn_local(async move {
                match api.update_profile(&payload).await {
                    Ok(_) => {
                        set_current_password.set(String::new());
                        set_new_password.set(String::new());
                        set_confirm_password.set(String::new());
                        set_notification
                            .set(Some(("Kata sandi berhasil diubah.".to_string(), false)));
                    }
                    Err(err) => {
                        let copy = err
                            .backend_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| "Gagal mengubah kata sandi.".to_string());
                        set_notification.set(Some((copy, true)));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    // Toasts fade on their own after a few seconds.
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <div class="min-h-screen bg-base-100 p-4 pb-24">
            <Show when=move || notification.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        let is_error = notification.get().map(|(_, e)| e).unwrap_or(false);
                        if is_error {
                            "alert alert-error shadow-lg"
                        } else {
                            "alert alert-success shadow-lg"
                        }
                    }>
                        <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center gap-2 mb-6">
                <Link to="/profile" class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeftIcon class="h-4 w-4" />
                    "Kembali"
                </Link>
                <h2 class="text-2xl font-bold">"Pengaturan"</h2>
            </div>

            <Show
                when=move || !loading_user.get()
                fallback=|| view! {
                    <div class="space-y-4 max-w-md">
                        <div class="h-12 bg-base-200 rounded-lg animate-pulse"></div>
                        <div class="h-12 bg-base-200 rounded-lg animate-pulse"></div>
                    </div>
                }
            >
                <div class="max-w-md space-y-8">
                    <div class="card bg-base-200 shadow-md">
                        <div class="card-body">
                            <h3 class="card-title text-lg">"Profil"</h3>
                            <div>
                                <label class="label" for="name">
                                    <span class="label-text">"Nama"</span>
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=name
                                />
                            </div>
                            <div>
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                />
                            </div>
                            <div class="card-actions justify-end mt-2">
                                <button
                                    class="btn btn-primary btn-sm"
                                    disabled=move || saving.get()
                                    on:click=on_save_profile
                                >
                                    "Simpan"
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-200 shadow-md">
                        <div class="card-body">
                            <h3 class="card-title text-lg">"Ubah Kata Sandi"</h3>
                            <div>
                                <label class="label" for="current-password">
                                    <span class="label-text">"Kata sandi saat ini"</span>
                                </label>
                                <input
                                    id="current-password"
                                    type="password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_current_password.set(event_target_value(&ev))
                                    prop:value=current_password
                                />
                            </div>
                            <div>
                                <label class="label" for="new-password">
                                    <span class="label-text">"Kata sandi baru"</span>
                                </label>
                                <input
                                    id="new-password"
                                    type="password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                    prop:value=new_password
                                />
                            </div>
                            <div>
                                <label class="label" for="confirm-password">
                                    <span class="label-text">"Konfirmasi kata sandi baru"</span>
                                </label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                    prop:value=confirm_password
                                />
                            </div>
                            <div class="card-actions justify-end mt-2">
                                <button
                                    class="btn btn-primary btn-sm"
                                    disabled=move || saving.get()
                                    on:click=on_change_password
                                >
                                    "Ubah"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
