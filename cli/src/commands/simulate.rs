use crate::helper::{load_file, tokio_runtime};
use crate::CLIError;
use meshx::address::UnicastAddress;
use meshx::app::{AppControlEvent, AppMessage};
use meshx::control::payload::{CtlRequest, OnOffRequest};
use meshx::control::{evt, MsgCode, Payload};
use meshx::platform::StackEvent;
use meshx::runtime::{command_channel, NodeCommand, NodeRunner, COMMAND_CHANNEL_SIZE};
use meshx::MeshxConfig;
use serde::Deserialize;
use std::time::Duration;

/// One line of a simulation script.
#[derive(Deserialize, Debug)]
pub enum Step {
    /// A mesh stack callback.
    Stack(StackEvent),
    /// Let the node clock run for this many milliseconds.
    Wait(u64),
    OnOff(OnOffRequest),
    Ctl(CtlRequest),
    Reset,
}
impl Step {
    fn command(self) -> Option<NodeCommand> {
        Some(match self {
            Step::Stack(event) => NodeCommand::Stack(event),
            Step::Wait(_) => return None,
            Step::OnOff(req) => NodeCommand::Publish {
                code: MsgCode::ToBle,
                evt: evt::to_ble::SET_ON_OFF,
                payload: Payload::OnOffRequest(req),
            },
            Step::Ctl(req) => NodeCommand::Publish {
                code: MsgCode::ToBle,
                evt: evt::to_ble::SET_CTL,
                payload: Payload::CtlRequest(req),
            },
            Step::Reset => NodeCommand::Publish {
                code: MsgCode::Provision,
                evt: evt::provision::NODE_RESET,
                payload: Payload::None,
            },
        })
    }
}

pub fn sub_command() -> clap::App<'static, 'static> {
    clap::SubCommand::with_name("simulate")
        .about("Run a node against a JSON script of stack events and requests")
        .arg(
            clap::Arg::with_name("script")
                .value_name("SCRIPT")
                .required(true)
                .help("JSON array of steps"),
        )
        .arg(
            clap::Arg::with_name("primary_address")
                .short("a")
                .value_name("UNICAST_ADDRESS")
                .validator(crate::helper::is_u16_validator)
                .help("Primary element address the radio reports"),
        )
}
pub fn simulate_matches(
    parent_logger: &slog::Logger,
    config: &MeshxConfig,
    matches: &clap::ArgMatches,
) -> Result<(), CLIError> {
    let script_path = matches.value_of("script").expect("required by clap");
    let logger = parent_logger.new(o!("script" => script_path.to_owned()));
    let steps: Vec<Step> = serde_json::from_reader(load_file(script_path, false, false)?)
        .map_err(CLIError::SerdeJSON)?;
    let primary = matches
        .value_of("primary_address")
        .map(|a| UnicastAddress::new(a.parse().expect("checked by clap")));
    info!(logger, "script loaded"; "steps" => steps.len());

    let (mut node, flash) = super::boot_node(&logger, config, primary)?;
    node.reg_element_callback(Box::new(|msg: &AppMessage| {
        println!("{}", serde_json::json!({ "app": msg }));
        Ok(())
    }));
    node.reg_control_callback(Box::new(|event: &AppControlEvent| {
        println!("{}", serde_json::json!({ "control": event }));
        Ok(())
    }));
    let (tx, commands) = command_channel(COMMAND_CHANNEL_SIZE);
    let runner = NodeRunner::new(node, logger.new(o!("task" => "control")));
    let driver_log = logger.clone();
    let driver = async move {
        for step in steps {
            debug!(driver_log, "step"; "step" => ?step);
            match step {
                Step::Wait(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                step => {
                    if let Some(command) = step.command() {
                        if tx.send(command).await.is_err() {
                            warn!(driver_log, "control task gone");
                            return;
                        }
                    }
                }
            }
        }
        // Let the control task finish what the last step started before stopping it.
        tokio::task::yield_now().await;
        let _ = tx.send(NodeCommand::Shutdown).await;
    };
    let (node, _) = tokio_runtime().block_on(async { tokio::join!(runner.run(commands), driver) });
    let node = node?;
    for e in node.errors() {
        warn!(logger, "handler error"; "code" => e.code.as_str(), "evt" => e.evt, "handler" => ?e.handler, "err" => %e.err);
    }
    info!(logger, "done"; "now_ms" => node.now_ms(), "halted" => node.is_halted(), "commits" => flash.commit_count());
    Ok(())
}
