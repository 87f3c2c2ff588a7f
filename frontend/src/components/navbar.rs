//! Top bar: brand plus the profile dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::WisataApi;
use crate::auth::{logout, use_auth};
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = expect_context::<WisataApi>();

    let display_name = move || auth_ctx.state.get().display_name();
    let avatar_url = move || {
        format!(
            "https://ui-avatars.com/api/?name={}&size=128&background=2563EB&color=fff",
            display_name()
        )
    };

    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            // The router notices the state change and moves to the login
            // screen on its own.
            logout(&auth_ctx, &api).await;
        });
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow-sm flex justify-between">
            <Link to="/" class="btn btn-ghost text-xl">"Lampung Go!"</Link>
            <div class="dropdown dropdown-end">
                <label tabindex="0" class="btn btn-ghost btn-circle avatar">
                    <div class="w-8 rounded-full ring ring-primary ring-offset-base-100 ring-offset-2">
                        <img src=avatar_url alt="profil" />
                    </div>
                </label>
                <ul tabindex="0" class="mt-5 z-[1] p-4 shadow menu menu-sm dropdown-content bg-base-100 text-base-content rounded-box w-56">
                    <li class="mb-2 flex flex-col items-center">
                        <span class="font-semibold text-base">{display_name}</span>
                        <span class="text-sm opacity-70">"Profil Pengguna"</span>
                    </li>
                    <div class="divider my-0"></div>
                    <li>
                        <Link to="/profile">"Profil"</Link>
                    </li>
                    <li>
                        <Link to="/settings">"Pengaturan"</Link>
                    </li>
                    <li>
                        <button on:click=on_logout class="btn btn-error btn-sm w-full mt-2 text-white">
                            "Logout"
                        </button>
                    </li>
                </ul>
            </div>
        </div>
    }
}
