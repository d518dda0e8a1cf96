use dioxus::prelude::*;
use khademni::model::job::{JobDto, JobStatus};

/// A job posting with its actions rendered as children.
#[component]
pub fn JobCard(job: JobDto, children: Element) -> Element {
    let badge = match job.status {
        JobStatus::Open => "badge badge-success",
        JobStatus::Closed => "badge badge-neutral",
        JobStatus::Unknown => "badge badge-ghost",
    };

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body",
                div { class: "flex items-center justify-between gap-2",
                    h2 { class: "card-title",
                        "{job.title}"
                    }
                    span { class: "{badge}",
                        "{job.status}"
                    }
                }
                p { class: "whitespace-pre-line",
                    "{job.description}"
                }
                div { class: "card-actions justify-end",
                    {children}
                }
            }
        }
    )
}
