use crate::helper::HexSlice;
use crate::CLIError;
use meshx::MeshxConfig;

pub fn sub_command() -> clap::App<'static, 'static> {
    clap::SubCommand::with_name("composition")
        .about("Build the node described by the config and print its composition")
        .arg(
            clap::Arg::with_name("page0")
                .long("page0")
                .help("Print composition data page 0 as hex instead of JSON"),
        )
}
pub fn composition_matches(
    parent_logger: &slog::Logger,
    config: &MeshxConfig,
    matches: &clap::ArgMatches,
) -> Result<(), CLIError> {
    let logger = parent_logger.new(o!("command" => "composition"));
    let (node, _) = super::boot_node(&logger, config, None)?;
    info!(logger, "built"; "elements" => node.composition().len(), "handlers" => node.handler_names().len());
    if matches.is_present("page0") {
        let page0 = node
            .composition()
            .pack_page0()
            .map_err(|e| CLIError::OtherMessage(format!("composition not packable: {:?}", e)))?;
        println!("{:x}", HexSlice(&page0));
    } else {
        serde_json::to_writer_pretty(std::io::stdout(), node.composition())
            .map_err(CLIError::SerdeJSON)?;
        println!();
    }
    Ok(())
}
