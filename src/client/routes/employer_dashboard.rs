use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTrash, FaUsers};
use dioxus_free_icons::Icon;
use khademni::{
    model::job::{ApplicationDto, CreateJobDto, JobDto, JobStatus},
    service::{DeleteOutcome, Services},
};

use crate::client::{
    components::{JobCard, Notice, NoticeBanner, Page},
    util::confirm_dialog,
};

#[component]
pub fn EmployerDashboard() -> Element {
    let services = use_context::<Services>();

    let mut jobs = use_signal(Vec::<JobDto>::new);
    let mut loading = use_signal(|| true);
    let mut notice = use_signal(|| None::<Notice>);

    // Retrieve the employer's jobs on component load
    let load_service = services.jobs.clone();
    use_hook(move || {
        spawn(async move {
            match load_service.list_my_jobs().await {
                Ok(list) => jobs.set(list),
                Err(err) => notice.set(Some(Notice::error(format!(
                    "Failed to load your jobs: {}",
                    err.message
                )))),
            }
            loading.set(false);
        });
    });

    rsx!(
        Title { "Dashboard | Khademni" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col lg:flex-row gap-4",
                div { class: "flex flex-col gap-4 w-full lg:max-w-96",
                    PostJobCard { jobs, notice }
                    if let Some(notice) = notice() {
                        NoticeBanner { notice }
                    }
                }
                div { class: "flex flex-col gap-4 flex-1",
                    h1 { class: "text-2xl font-semibold",
                        "Your jobs"
                    }
                    if loading() {
                        div { class: "flex justify-center p-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    } else {
                        PostedJobs { jobs, notice }
                    }
                }
            }
        }
    )
}

#[component]
fn PostJobCard(mut jobs: Signal<Vec<JobDto>>, mut notice: Signal<Option<Notice>>) -> Element {
    let services = use_context::<Services>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut posting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let create_service = services.jobs.clone();
        let job = CreateJobDto {
            title: title(),
            description: description(),
            status: JobStatus::Open,
        };

        async move {
            posting.set(true);

            match create_service.create_job(&job).await {
                Ok(created) => {
                    jobs.write().push(created);
                    title.set(String::new());
                    description.set(String::new());
                    notice.set(Some(Notice::success("Job posted")));
                }
                Err(err) => notice.set(Some(Notice::error(format!(
                    "Job creation failed: {}",
                    err.message
                )))),
            }

            posting.set(false);
        }
    };

    rsx!(
        div { class: "card shadow-sm w-full",
            form { class: "card-body flex flex-col gap-3",
                onsubmit,
                h2 { class: "card-title",
                    "Post a job"
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description",
                    rows: 4,
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: posting(),
                    if posting() {
                        span { class: "loading loading-spinner" }
                    }
                    "Post job"
                }
            }
        }
    )
}

#[component]
fn PostedJobs(mut jobs: Signal<Vec<JobDto>>, mut notice: Signal<Option<Notice>>) -> Element {
    let services = use_context::<Services>();

    let mut selected_job = use_signal(|| None::<i64>);
    let mut applications = use_signal(Vec::<ApplicationDto>::new);
    let mut loading_applications = use_signal(|| false);
    let mut deleting = use_signal(|| None::<i64>);

    if jobs.read().is_empty() {
        return rsx!(
            p { class: "text-center p-8",
                "You haven't posted any jobs yet."
            }
        );
    }

    rsx!(
        {jobs.read().iter().map(|job| {
            let job_id = job.id;
            let applications_service = services.jobs.clone();
            let delete_service = services.jobs.clone();

            rsx!(
                JobCard { key: "{job_id}", job: job.clone(),
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: move |_| {
                            let applications_service = applications_service.clone();
                            async move {
                                selected_job.set(Some(job_id));
                                loading_applications.set(true);

                                match applications_service.list_applications(job_id).await {
                                    Ok(list) => applications.set(list),
                                    Err(err) => {
                                        applications.set(Vec::new());
                                        notice.set(Some(Notice::error(format!(
                                            "Failed to load applications: {}",
                                            err.message
                                        ))));
                                    }
                                }

                                loading_applications.set(false);
                            }
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaUsers
                        }
                        "Applications"
                    }
                    button {
                        class: "btn btn-error btn-outline flex gap-2",
                        disabled: deleting() == Some(job_id),
                        onclick: move |_| {
                            let delete_service = delete_service.clone();
                            async move {
                                deleting.set(Some(job_id));
                                let result = delete_service
                                    .delete_job(job_id, confirm_dialog("Are you sure you want to delete this job?"))
                                    .await;
                                deleting.set(None);

                                match result {
                                    Ok(DeleteOutcome::Deleted) => {
                                        jobs.write().retain(|job| job.id != job_id);
                                        if selected_job() == Some(job_id) {
                                            selected_job.set(None);
                                            applications.set(Vec::new());
                                        }
                                        notice.set(Some(Notice::success("Job deleted")));
                                    }
                                    Ok(DeleteOutcome::Cancelled) => {}
                                    Err(err) => notice.set(Some(Notice::error(format!(
                                        "Failed to delete job: {}",
                                        err.message
                                    )))),
                                }
                            }
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaTrash
                        }
                        "Delete"
                    }
                }
                if selected_job() == Some(job_id) {
                    ApplicationTable {
                        applications: applications(),
                        loading: loading_applications(),
                    }
                }
            )
        })}
    )
}

#[component]
fn ApplicationTable(applications: Vec<ApplicationDto>, loading: bool) -> Element {
    if loading {
        return rsx!(
            div { class: "flex justify-center p-4",
                span { class: "loading loading-spinner" }
            }
        );
    }

    if applications.is_empty() {
        return rsx!(
            p { class: "text-sm px-4",
                "No applications yet."
            }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Applicant" }
                        th { "Email" }
                        th { "Status" }
                    }
                }
                tbody {
                    {applications.iter().map(|application| {
                        let email = application
                            .worker
                            .as_ref()
                            .and_then(|worker| worker.email.clone())
                            .unwrap_or_default();

                        rsx! {
                            tr { key: "{application.id}",
                                td { {application.applicant_label()} }
                                td { "{email}" }
                                td { "{application.status}" }
                            }
                        }
                    })}
                }
            }
        }
    )
}
