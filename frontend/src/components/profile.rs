//! Profile screen: the session-derived identity, read straight from the
//! auth state. The settings screen owns the editable version.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{LogOutIcon, SettingsIcon};
use crate::api::WisataApi;
use crate::auth::{logout, use_auth};
use crate::web::router::Link;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = expect_context::<WisataApi>();

    let display_name = move || auth_ctx.state.get().display_name();
    let email = move || auth_ctx.state.get().email();
    let avatar_url = move || {
        format!(
            "https://ui-avatars.com/api/?name={}&size=128&background=2563EB&color=fff",
            display_name()
        )
    };

    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            logout(&auth_ctx, &api).await;
        });
    };

    view! {
        <div class="min-h-screen flex items-center px-5 justify-center bg-gradient-to-br from-blue-600 via-blue-500 to-blue-400">
            <div class="bg-white p-8 rounded-2xl shadow-lg w-full max-w-md">
                <h2 class="text-3xl font-bold text-center text-gray-800 mb-6">"Profil Pengguna"</h2>
                <div class="space-y-6">
                    <div class="flex justify-center">
                        <div class="w-32 h-32 rounded-full ring-4 ring-blue-500 overflow-hidden">
                            <img src=avatar_url alt="profil" class="w-full h-full object-cover" />
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Nama"</label>
                        <div class="w-full px-4 py-3 rounded-lg border border-gray-300 bg-gray-50 text-gray-800">
                            {display_name}
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                        <div class="w-full px-4 py-3 rounded-lg border border-gray-300 bg-gray-50 text-gray-800">
                            {email}
                        </div>
                    </div>
                    <Link
                        to="/settings"
                        class="btn btn-outline w-full gap-2"
                    >
                        <SettingsIcon class="h-4 w-4" />
                        "Pengaturan"
                    </Link>
                    <button
                        on:click=on_logout
                        class="w-full bg-red-600 text-white py-3 rounded-lg font-semibold hover:bg-red-700 flex items-center justify-center gap-2"
                    >
                        <LogOutIcon class="h-4 w-4" />
                        "Keluar"
                    </button>
                </div>
            </div>
        </div>
    }
}
