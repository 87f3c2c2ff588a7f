use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::WisataApi;
use crate::auth::{register, use_auth};
use crate::web::router::Link;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = expect_context::<WisataApi>();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Kata sandi dan konfirmasi tidak sama".to_string()));
            return;
        }

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let result = register(
                &auth_ctx,
                &api,
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                &confirm.get_untracked(),
            )
            .await;
            if let Err(err) = result {
                let copy = err
                    .backend_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| "Registrasi gagal".to_string());
                set_error_msg.set(Some(copy));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center px-5 justify-center bg-gradient-to-br from-blue-600 via-blue-500 to-blue-400">
            <h1 class="text-4xl font-extrabold text-white mb-8">"Lampung Go!"</h1>
            <div class="bg-white p-8 rounded-2xl shadow-lg w-full max-w-md">
                <h2 class="text-2xl font-bold text-center text-gray-800 mb-6">"Buat Akun Baru"</h2>
                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="name">
                            "Nama Lengkap"
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Masukkan nama lengkap"
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Masukkan email"
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="password">
                            "Kata Sandi"
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Masukkan kata sandi"
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="confirm">
                            "Konfirmasi Kata Sandi"
                        </label>
                        <input
                            id="confirm"
                            type="password"
                            placeholder="Konfirmasi kata sandi"
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            prop:value=confirm
                            required
                        />
                    </div>
                    <Show when=move || error_msg.get().is_some()>
                        <div class="text-red-500 text-sm text-center bg-red-50 p-2 rounded-lg">
                            {move || error_msg.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 disabled:bg-blue-400"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <span class="loading loading-spinner loading-sm mr-2"></span>
                                    "Memuat..."
                                </span>
                            }
                            .into_any()
                        } else {
                            "Daftar".into_any()
                        }}
                    </button>
                </form>
                <div class="mt-6 text-center">
                    <p class="text-gray-600">
                        "Sudah punya akun? "
                        <Link to="/login" class="text-blue-600 font-semibold hover:underline">
                            "Masuk"
                        </Link>
                    </p>
                </div>
            </div>
        </div>
    }
}
