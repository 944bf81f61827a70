use anyhow::Context;
use clap::Parser;
use portfolio_catalog::app::commands;
use portfolio_catalog::config::cli::Command;
use portfolio_catalog::utils::error::ErrorSeverity;
use portfolio_catalog::utils::logger::{self, LogFormat};
use portfolio_catalog::CliConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);
    tracing::debug!("CLI config: {:?}", config);

    match run(config.command) {
        Ok(code) => code,
        Err(e) => {
            // 記錄詳細錯誤信息
            match e.downcast_ref::<portfolio_catalog::CatalogError>() {
                Some(err) => {
                    tracing::error!(
                        "❌ {:#} (Category: {:?}, Severity: {:?})",
                        e,
                        err.category(),
                        err.severity()
                    );
                    eprintln!("❌ {:#}", e);
                    eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                }
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                }
            }
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Lint { catalog, deploy } => {
            let outcome = commands::lint(catalog.as_deref(), deploy.as_deref())
                .context("could not load the inputs to lint")?;

            // 根據檢查結果決定退出碼
            if outcome.is_clean() {
                println!(
                    "✅ {} project(s) and {} section(s) look good",
                    outcome.projects_checked, outcome.sections_checked
                );
                return Ok(ExitCode::SUCCESS);
            }

            for violation in &outcome.violations {
                let marker = if violation.severity() >= ErrorSeverity::High {
                    "❌"
                } else {
                    "⚠️"
                };
                println!("{} {}", marker, violation.user_friendly_message());
                println!("   💡 {}", violation.recovery_suggestion());
            }
            println!("{} problem(s) found", outcome.violations.len());
            Ok(ExitCode::from(1))
        }
        Command::Export { catalog, format } => {
            let catalog = commands::load_catalog(catalog.as_deref())
                .context("could not load the catalog")?;
            println!("{}", commands::export(&catalog, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Deploy { deploy, format } => {
            let descriptor = commands::load_descriptor(deploy.as_deref())
                .context("could not load the deployment descriptor")?;
            println!("{}", commands::describe(&descriptor, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
