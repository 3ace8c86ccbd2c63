pub mod composition;
pub mod simulate;
pub mod ut;

use crate::helper::SimPlatform;
use crate::CLIError;
use meshx::address::UnicastAddress;
use meshx::nvs::MemoryBackend;
use meshx::{MeshxConfig, Node};

/// Boots a node on the simulated radio with an empty in-memory flash.
pub fn boot_node(
    logger: &slog::Logger,
    config: &MeshxConfig,
    primary: Option<UnicastAddress>,
) -> Result<(Node, MemoryBackend), CLIError> {
    let flash = MemoryBackend::new();
    let node = Node::new(
        config,
        Box::new(SimPlatform::new(primary, logger)),
        Box::new(flash.clone()),
        logger.new(o!("node" => config.product_name.clone())),
    )?;
    Ok((node, flash))
}
