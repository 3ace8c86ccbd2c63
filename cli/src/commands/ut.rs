use crate::CLIError;
use meshx::address::UnicastAddress;
use meshx::MeshxConfig;

pub fn sub_command() -> clap::App<'static, 'static> {
    clap::SubCommand::with_name("ut")
        .about("Run one unit test command against a freshly booted node")
        .arg(
            clap::Arg::with_name("module_id")
                .value_name("MODULE_ID")
                .required(true)
                .validator(crate::helper::is_u8_validator),
        )
        .arg(
            clap::Arg::with_name("cmd_id")
                .value_name("CMD_ID")
                .required(true)
                .validator(crate::helper::is_u8_validator),
        )
        .arg(
            clap::Arg::with_name("args")
                .value_name("ARGS")
                .multiple(true)
                .validator(crate::helper::is_u32_validator),
        )
        .arg(
            clap::Arg::with_name("advance")
                .long("advance")
                .value_name("MS")
                .default_value("0")
                .validator(crate::helper::is_u32_validator)
                .help("Run the node clock this long after the command"),
        )
}
pub fn ut_matches(
    parent_logger: &slog::Logger,
    config: &MeshxConfig,
    matches: &clap::ArgMatches,
) -> Result<(), CLIError> {
    let module_id: u8 = matches
        .value_of("module_id")
        .and_then(|v| v.parse().ok())
        .expect("checked by clap");
    let cmd_id: u8 = matches
        .value_of("cmd_id")
        .and_then(|v| v.parse().ok())
        .expect("checked by clap");
    let args: Vec<u32> = matches
        .values_of("args")
        .map(|values| values.filter_map(|v| v.parse().ok()).collect())
        .unwrap_or_default();
    let advance: u64 = matches
        .value_of("advance")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let logger = parent_logger.new(o!("module_id" => module_id, "cmd_id" => cmd_id));
    let (mut node, _) = super::boot_node(&logger, config, Some(UnicastAddress::new(0x0001)))?;
    node.unit_test(module_id, cmd_id, &args)?;
    node.advance_by(advance);
    for e in node.take_errors() {
        warn!(logger, "handler error"; "code" => e.code.as_str(), "handler" => ?e.handler, "err" => %e.err);
    }
    info!(logger, "ok"; "now_ms" => node.now_ms());
    Ok(())
}
