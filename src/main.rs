// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use jobcrawl::application::use_cases::crawl_run::CrawlRunUseCase;
use jobcrawl::config::settings::Settings;
use jobcrawl::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，读取命令行参数并执行一次抓取运行
#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobcrawl...");

    // 2. Positional arguments: input file and aggregate output file name
    let mut args = std::env::args().skip(1);
    let (input_file, output_file_name) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (PathBuf::from(input), output),
        _ => {
            error!("Usage: jobcrawl <input_file> <output_file_name>");
            return ExitCode::from(2);
        }
    };

    // 3. Load configuration
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Configuration loaded");

    // 4. Run the crawl
    let use_case = CrawlRunUseCase::new(settings);
    match use_case.run(&input_file, &output_file_name).await {
        Ok(summary) => {
            let (completed, skipped, partial, failed) = summary.counts();
            info!(
                "Run summary: {} completed, {} skipped, {} partial, {} failed",
                completed, skipped, partial, failed
            );
            if summary.has_failures() {
                // 部分结果已经落盘，退出码告诉运维有职位没抓全
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("Crawl run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
