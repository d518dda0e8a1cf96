use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;
use khademni::service::Services;

use crate::client::components::{JobCard, Notice, NoticeBanner, Page};

#[component]
pub fn WorkerDashboard() -> Element {
    let services = use_context::<Services>();
    let mut notice = use_signal(|| None::<Notice>);
    let mut applying = use_signal(|| None::<i64>);

    let list_service = services.jobs.clone();
    let jobs = use_resource(move || {
        let list_service = list_service.clone();
        async move { list_service.list_jobs().await }
    });

    let content = match &*jobs.read() {
        None => rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        ),
        Some(Err(err)) => rsx!(
            NoticeBanner { notice: Notice::error(format!("Failed to load jobs: {}", err.message)) }
        ),
        Some(Ok(list)) if list.is_empty() => rsx!(
            p { class: "text-center p-8",
                "There are no open jobs right now, check back later."
            }
        ),
        Some(Ok(list)) => rsx!(
            {list.iter().map(|job| {
                let job_id = job.id;
                let apply_service = services.jobs.clone();

                rsx!(
                    JobCard { key: "{job_id}", job: job.clone(),
                        button {
                            class: "btn btn-primary flex gap-2",
                            disabled: applying() == Some(job_id),
                            onclick: move |_| {
                                let apply_service = apply_service.clone();
                                async move {
                                    applying.set(Some(job_id));
                                    let result = apply_service.apply_for_job(job_id).await;
                                    applying.set(None);

                                    notice.set(Some(match result {
                                        Ok(()) => Notice::success("Application submitted"),
                                        Err(err) => Notice::error(format!("Application failed: {}", err.message)),
                                    }));
                                }
                            },
                            if applying() == Some(job_id) {
                                span { class: "loading loading-spinner loading-sm" }
                            } else {
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaPaperPlane
                                }
                            }
                            "Apply"
                        }
                    }
                )
            })}
        ),
    };

    rsx!(
        Title { "Jobs | Khademni" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold",
                    "Open jobs"
                }
                if let Some(notice) = notice() {
                    NoticeBanner { notice }
                }
                {content}
            }
        }
    )
}
