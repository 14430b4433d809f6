/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;
use std::time::SystemTime;

use marketplacemetering::{Instant, Region};

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region to meter usage in
    #[structopt(default_value = "us-east-1", short, long)]
    region: String,

    /// Product code issued when the product was listed
    #[structopt(short, long)]
    product_code: String,

    /// The usage dimension, as defined in the product listing
    #[structopt(short, long)]
    dimension: String,

    #[structopt(short, long, default_value = "1")]
    quantity: i32,

    /// Validate the request without recording usage
    #[structopt(long)]
    dry_run: bool,

    /// Activate verbose mode
    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    if opt.verbose {
        println!("Metering client version: {}\n", marketplacemetering::PKG_VERSION);
        println!("Region:       {}", opt.region);
        println!("Product code: {}", opt.product_code);
        println!("Dimension:    {}", opt.dimension);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = marketplacemetering::Config::builder()
        .region(Region::new(opt.region))
        .build();

    let client =
        marketplacemetering::Client::from_conf_conn(config, aws_hyper::conn::Standard::https());

    let result = client
        .meter_usage()
        .product_code(opt.product_code)
        .timestamp(Instant::from_system_time(SystemTime::now()))
        .usage_dimension(opt.dimension)
        .usage_quantity(opt.quantity)
        .dry_run(opt.dry_run)
        .send()
        .await;

    match result {
        Ok(output) => match output.metering_record_id() {
            Some(id) => println!("Metering record: {}", id),
            None => println!("Usage accepted"),
        },
        Err(err) => {
            eprintln!("Failed to meter usage: {}", marketplacemetering::Error::from(err));
            process::exit(1);
        }
    }
}
