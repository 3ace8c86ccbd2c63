use slog::Drain;
#[macro_use]
extern crate slog;

use std::convert::TryFrom;

pub mod commands;
pub mod helper;
pub enum CLIError {
    IOError(String, std::io::Error),
    Clap(clap::Error),
    SerdeJSON(serde_json::Error),
    Meshx(meshx::MeshxError),
    OtherMessage(String),
}
impl From<meshx::MeshxError> for CLIError {
    fn from(e: meshx::MeshxError) -> Self {
        CLIError::Meshx(e)
    }
}

fn main() {
    let app = clap::App::new("MeshX CLI")
        .version(clap::crate_version!())
        .about("Host side driver for the MeshX node control plane")
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .max_values(5)
                .help("Set the amount of logging from level 0 up to level 5"),
        )
        .arg(
            clap::Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Specifies the node config .json file"),
        )
        .subcommand(commands::composition::sub_command())
        .subcommand(commands::simulate::sub_command())
        .subcommand(commands::ut::sub_command());
    let matches = app.get_matches();

    let log_level = slog::Level::from_usize(
        1 + usize::try_from(matches.occurrences_of("verbose"))
            .expect("verbose usize overflow (how??)"),
    )
    .expect("verbose limit set too low");
    let drain = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let root = slog::Logger::root(
        slog::LevelFilter::new(slog_term::FullFormat::new(drain).build(), log_level).fuse(),
        slog::o!(),
    );
    trace!(root, "main");
    let sub_cmd = matches.subcommand().0;
    debug!(root, "arg_match"; "sub_command" => sub_cmd);
    if let Err(e) = (|| -> Result<(), CLIError> {
        let config = helper::load_config(matches.value_of("config"))?;
        match matches.subcommand() {
            ("", None) => error!(root, "no command given"),
            ("composition", Some(sub_matches)) => {
                commands::composition::composition_matches(&root, &config, sub_matches)?
            }
            ("simulate", Some(sub_matches)) => {
                commands::simulate::simulate_matches(&root, &config, sub_matches)?
            }
            ("ut", Some(sub_matches)) => commands::ut::ut_matches(&root, &config, sub_matches)?,
            _ => unreachable!("unhandled sub_command"),
        }
        debug!(root, "matches_done");
        Ok(())
    })() {
        match e {
            CLIError::IOError(path, error) => {
                eprintln!("io error {:?} with path '{}'", error, path)
            }
            CLIError::Clap(error) => eprintln!("{}", &error.message),
            CLIError::SerdeJSON(error) => eprintln!("json error {}", error),
            CLIError::Meshx(error) => eprintln!("node error: {}", error),
            CLIError::OtherMessage(msg) => eprintln!("error: {}", &msg),
        };
        std::process::exit(1);
    }
}
