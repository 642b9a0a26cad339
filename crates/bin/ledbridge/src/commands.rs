//! Subcommand execution.

use std::process::ExitCode;

use anyhow::Context;
use ledbridge_app::ports::{ApiClient, Notifier};
use ledbridge_app::services::catalog_service::CatalogService;
use ledbridge_app::services::form_bridge::FormBridge;
use ledbridge_domain::catalog::{DeviceInfo, GroupInfo};
use ledbridge_domain::outcome::SubmitOutcome;

use crate::batch::Batch;
use crate::cli::Command;

/// Run one subcommand against `client`, reporting submissions through
/// `notifier`.
///
/// # Errors
///
/// Returns an error when a listing request fails or a batch file cannot be
/// loaded. Failed submissions are not errors: they are reported through the
/// notifier and turned into a failing exit code.
pub async fn run<C: ApiClient, N: Notifier>(
    command: Command,
    client: C,
    notifier: N,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Device(args) => {
            let bridge = FormBridge::new(client, notifier);
            Ok(exit_code(&[bridge.submit_device(args.into()).await]))
        }
        Command::Group(args) => {
            let bridge = FormBridge::new(client, notifier);
            Ok(exit_code(&[bridge.submit_group(args.into()).await]))
        }
        Command::Color(args) => {
            let bridge = FormBridge::new(client, notifier);
            Ok(exit_code(&[bridge.submit_color(args.into()).await]))
        }
        Command::Batch { file } => {
            let batch = Batch::load(&file)
                .with_context(|| format!("cannot load batch {}", file.display()))?;
            let bridge = FormBridge::new(client, notifier);
            Ok(exit_code(&batch.submit_all(&bridge).await))
        }
        Command::Devices => {
            let devices = CatalogService::new(client)
                .list_devices()
                .await
                .context("failed to list devices")?;
            for device in &devices {
                println!("{}", format_device(device));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Groups => {
            let groups = CatalogService::new(client)
                .list_groups()
                .await
                .context("failed to list groups")?;
            for group in &groups {
                println!("{}", format_group(group));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(outcomes: &[SubmitOutcome]) -> ExitCode {
    if all_succeeded(outcomes) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn all_succeeded(outcomes: &[SubmitOutcome]) -> bool {
    outcomes.iter().all(SubmitOutcome::is_success)
}

fn format_device(device: &DeviceInfo) -> String {
    format!(
        "{}\t{}:{}\t{} pixels",
        device.name, device.ip, device.port, device.pixels
    )
}

fn format_group(group: &GroupInfo) -> String {
    format!(
        "{}\t{}",
        group.name,
        group.device_names().collect::<Vec<_>>().join(", ")
    )
}
