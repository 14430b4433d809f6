/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sagemaker::model::{SortBy, SortOrder};
use sagemaker::Region;
use smithy_types::instant::Format;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(default_value = "us-west-2", short, long)]
    region: String,

    /// Only list jobs whose name contains this string
    #[structopt(short, long)]
    name_contains: Option<String>,

    #[structopt(short, long, default_value = "10")]
    max_results: i32,

    /// Activate verbose mode
    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), sagemaker::Error> {
    let opt = Opt::from_args();

    if opt.verbose {
        println!("SageMaker client version: {}\n", sagemaker::PKG_VERSION);
        println!("Region: {}", opt.region);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = sagemaker::Config::builder()
        .region(Region::new(opt.region))
        .build();
    let client = sagemaker::Client::from_conf_conn(config, aws_hyper::conn::Standard::https());

    let job_details = client
        .list_training_jobs()
        .set_name_contains(opt.name_contains)
        .max_results(opt.max_results)
        .sort_by(SortBy::CreationTime)
        .sort_order(SortOrder::Descending)
        .send()
        .await?;

    println!("Job Name\tCreation DateTime\tDuration\tStatus");
    for job in job_details.training_job_summaries.unwrap_or_default() {
        let name = job.training_job_name.as_deref().unwrap_or_default();
        let created = job
            .creation_time
            .map(|time| time.fmt(Format::DateTime))
            .unwrap_or_default();
        let duration = match (job.creation_time, job.training_end_time) {
            (Some(start), Some(end)) => format!("{}s", end.epoch_seconds() - start.epoch_seconds()),
            _ => "-".to_string(),
        };
        let status = job
            .training_job_status
            .as_ref()
            .map(|status| status.as_str())
            .unwrap_or("Unknown");
        println!("{}\t{}\t{}\t{}", name, created, duration, status);
    }

    if let Some(token) = job_details.next_token {
        println!("\nMore jobs are available, next token: {}", token);
    }

    Ok(())
}
