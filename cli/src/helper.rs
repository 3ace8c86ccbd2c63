use crate::CLIError;
use meshx::address::UnicastAddress;
use meshx::error::MeshxResult;
use meshx::foundation::Composition;
use meshx::mesh::ElementID;
use meshx::models::light_ctl::CtlState;
use meshx::platform::{
    CtlClientMsg, CtlServerMsg, MeshPlatform, OnOffClientMsg, OnOffServerMsg, OutboundMessage,
};
use meshx::uuid::UUID;
use meshx::MeshxConfig;
use std::fmt::{Error, Formatter};
use std::str::FromStr;

pub struct HexSlice<'a>(pub &'a [u8]);
impl<'a> std::fmt::UpperHex for HexSlice<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for &b in self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl<'a> std::fmt::LowerHex for HexSlice<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for &b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
pub fn is_u8_validator(input: String) -> Result<(), String> {
    match u8::from_str(&input) {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a 8-bit unsigned integer", &input)),
    }
}
pub fn is_u16_validator(input: String) -> Result<(), String> {
    match u16::from_str(&input) {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a 16-bit unsigned integer", &input)),
    }
}
pub fn is_u32_validator(input: String) -> Result<(), String> {
    match u32::from_str(&input) {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a 32-bit unsigned integer", &input)),
    }
}
pub fn load_file(path: &str, writeable: bool, create: bool) -> Result<std::fs::File, CLIError> {
    std::fs::OpenOptions::new()
        .read(true)
        .write(writeable)
        .truncate(writeable)
        .create(create)
        .open(path)
        .map_err(|e| CLIError::IOError(path.to_owned(), e))
}
/// Node configuration from a `.json` file, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<MeshxConfig, CLIError> {
    match path {
        Some(path) => {
            serde_json::from_reader(load_file(path, false, false)?).map_err(CLIError::SerdeJSON)
        }
        None => Ok(MeshxConfig::default()),
    }
}
pub fn tokio_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("can't make async runtime")
}

/// Host stand-in for the radio. Everything the node sends is printed as one JSON line.
pub struct SimPlatform {
    primary: Option<UnicastAddress>,
    logger: slog::Logger,
}
impl SimPlatform {
    pub fn new(primary: Option<UnicastAddress>, logger: &slog::Logger) -> SimPlatform {
        SimPlatform {
            primary,
            logger: logger.new(o!("platform" => "sim")),
        }
    }
    fn emit(&self, message: OutboundMessage) -> MeshxResult {
        match serde_json::to_string(&message) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(self.logger, "unprintable message"; "err" => %e),
        }
        Ok(())
    }
}
impl MeshPlatform for SimPlatform {
    fn init(&mut self) -> MeshxResult {
        debug!(self.logger, "init");
        Ok(())
    }
    fn init_stack(&mut self, composition: &Composition) -> MeshxResult {
        info!(self.logger, "stack init"; "elements" => composition.len());
        Ok(())
    }
    fn set_node_name(&mut self, name: &str) -> MeshxResult {
        info!(self.logger, "node name"; "name" => name);
        Ok(())
    }
    fn enable_provisioning(&mut self, uuid: &UUID) -> MeshxResult {
        info!(self.logger, "provisioning enabled"; "uuid" => %uuid);
        Ok(())
    }
    fn primary_element_address(&self) -> Option<UnicastAddress> {
        self.primary
    }
    fn onoff_client_send(&mut self, msg: &OnOffClientMsg) -> MeshxResult {
        self.emit(OutboundMessage::OnOffClient(*msg))
    }
    fn ctl_client_send(&mut self, msg: &CtlClientMsg) -> MeshxResult {
        self.emit(OutboundMessage::CtlClient(*msg))
    }
    fn onoff_server_publish(&mut self, msg: &OnOffServerMsg) -> MeshxResult {
        self.emit(OutboundMessage::OnOffServer(*msg))
    }
    fn ctl_server_publish(&mut self, msg: &CtlServerMsg) -> MeshxResult {
        self.emit(OutboundMessage::CtlServer(*msg))
    }
    fn restore_onoff_server_state(&mut self, element_id: ElementID, on_off: bool) -> MeshxResult {
        debug!(self.logger, "onoff restored"; "element" => element_id, "on_off" => on_off);
        Ok(())
    }
    fn restore_ctl_server_state(&mut self, element_id: ElementID, ctl: &CtlState) -> MeshxResult {
        debug!(self.logger, "ctl restored"; "element" => element_id, "lightness" => ctl.lightness);
        Ok(())
    }
    fn reset(&mut self) -> MeshxResult {
        warn!(self.logger, "reset requested");
        Ok(())
    }
}
