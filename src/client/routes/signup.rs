use dioxus::document::Title;
use dioxus::prelude::*;
use khademni::{
    model::auth::{Role, SignupDto},
    service::Services,
};

use crate::client::{
    components::{Notice, NoticeBanner, Page},
    router::Route,
    store::SessionState,
};

#[component]
pub fn Signup() -> Element {
    let services = use_context::<Services>();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| None::<Notice>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let auth = services.auth.clone();
        let registration = SignupDto {
            username: username(),
            email: email(),
            password: password(),
            role: role(),
        };

        async move {
            submitting.set(true);
            error.set(None);

            match auth.signup(&registration).await {
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
        Title { "Sign up | Khademni" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-3",
                    onsubmit,
                    h2 { class: "card-title",
                        "Create an account"
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
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| role.set(evt.value().parse().unwrap_or_default()),
                        option { value: "worker", selected: role() == Role::Worker,
                            "I'm looking for work"
                        }
                        option { value: "employer", selected: role() == Role::Employer,
                            "I'm hiring"
                        }
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
                        "Sign up"
                    }
                    p { class: "text-sm text-center",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "link",
                            "Login"
                        }
                    }
                }
            }
        }
    )
}
