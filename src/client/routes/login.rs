use dioxus::document::Title;
use dioxus::prelude::*;
use khademni::{model::auth::LoginDto, service::Services};

use crate::client::{
    components::{Notice, NoticeBanner, Page},
    router::Route,
    store::SessionState,
};

#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<Notice>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let auth = services.auth.clone();
        let credentials = LoginDto {
            username: username(),
            password: password(),
        };

        async move {
            submitting.set(true);
            error.set(None);

            match auth.login(&credentials).await {
                Ok(authenticated) => {
                    session.role.set(authenticated.role);
                    navigator.push(Route::for_session(&authenticated));
                }
                Err(err) => {
                    error.set(Some(Notice::error(err.message)));
                    submitting.set(false);
                }
            }
        }
    };

    rsx!(
        Title { "Login | Khademni" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-3",
                    onsubmit,
                    h2 { class: "card-title",
                        "Login"
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(notice) = error() {
                        NoticeBanner { notice }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner" }
                        }
                        "Login"
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Signup {}, class: "link",
                            "Sign up"
                        }
                    }
                }
            }
        }
    )
}
