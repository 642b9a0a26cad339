//! Command-line surface.
//!
//! Each form subcommand mirrors one form of the dashboard. Numeric fields are
//! taken as raw text so that they go through the same lenient parsing as a
//! browser input would.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ledbridge_domain::form::{ColorForm, DeviceForm, GroupForm};

use crate::config::DEFAULT_PATH;

#[derive(Debug, Parser)]
#[command(
    name = "ledbridge",
    version,
    about = "Register pixel devices, group them and set their color"
)]
pub struct Cli {
    /// Base URL of the controller API (overrides config file and environment).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path of the configuration file.
    #[arg(long, global = true, default_value = DEFAULT_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a pixel device.
    Device(DeviceArgs),
    /// Create a group of registered devices.
    Group(GroupArgs),
    /// Set the color of every device in a group.
    Color(ColorArgs),
    /// List registered devices.
    Devices,
    /// List groups and their devices.
    Groups,
    /// Submit every form described in a TOML file, concurrently.
    Batch {
        /// File with `[[device]]`, `[[group]]` and `[[color]]` tables.
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct DeviceArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub ip: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub port: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub pixels: String,
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Comma-separated device names.
    #[arg(long, default_value = "")]
    pub devices: String,
}

#[derive(Debug, Args)]
pub struct ColorArgs {
    #[arg(long, default_value = "")]
    pub group: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub r: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub g: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub b: String,
}

impl From<DeviceArgs> for DeviceForm {
    fn from(args: DeviceArgs) -> Self {
        Self {
            name: args.name,
            ip: args.ip,
            port: args.port,
            pixels: args.pixels,
        }
    }
}

impl From<GroupArgs> for GroupForm {
    fn from(args: GroupArgs) -> Self {
        Self {
            name: args.name,
            devices: args.devices,
        }
    }
}

impl From<ColorArgs> for ColorForm {
    fn from(args: ColorArgs) -> Self {
        Self {
            group: args.group,
            r: args.r,
            g: args.g,
            b: args.b,
        }
    }
}
