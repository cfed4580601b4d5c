// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! mix_compute — CLI binary for MixKernel evaluation
//!
//! Takes a JSON selection on stdin or as --json argument, runs the blend
//! engine against the additive catalog, and outputs the MixResponse JSON
//! (result + advisory events).
//!
//! Usage:
//!   echo '[{"additive":"Cork","proportion":50},{"additive":"Quicklime","proportion":50}]' | mix_compute
//!   mix_compute --json '[{"additive":"Typha","proportion":100}]'
//!   mix_compute --list       # print catalog names and exit
//!   mix_compute --metrics    # print display descriptors and exit
//!
//! Exit status is non-zero when the kernel reports an error envelope, so
//! shell pipelines can gate on it.

use std::env;
use std::io::{self, Read};

use claymix_core::catalog::AdditiveCatalog;
use claymix_core::mix_kernel::MixKernel;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--list") {
        for name in AdditiveCatalog::list_names() {
            println!("{}", name);
        }
        return;
    }

    if args.iter().any(|a| a == "--metrics") {
        match serde_json::to_string(&MixKernel::list_metrics()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let input = get_input(&args);
    let output = MixKernel::compute_custom_mix(&input);

    // The kernel reports failures in-band; reflect them in the exit code.
    let is_error = serde_json::from_str::<serde_json::Value>(&output)
        .map(|v| v.get("error").is_some())
        .unwrap_or(true);

    println!("{}", output);
    if is_error {
        std::process::exit(1);
    }
}

fn get_input(args: &[String]) -> String {
    for i in 0..args.len() {
        if args[i] == "--json" && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("ERROR: Failed to read stdin");
        std::process::exit(1);
    }
    input
}
