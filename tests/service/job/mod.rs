mod apply_for_job;
mod create_job;
