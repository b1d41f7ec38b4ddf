use crate::entities::{Container, Instance, Item};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::warn;

/// Converts an external instance into an internal one.
/// Item values are resolved here: a declared value of zero or less becomes the area of the item.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let container = import_container(&ext_instance.container);
    let items = ext_instance.items.iter().map(import_item).collect_vec();

    let instance = Instance::try_new(ext_instance.name.clone(), container, items)
        .with_context(|| format!("invalid instance {}", ext_instance.name))?;

    let n_oversized = crate::placement::oversized_items(&instance).len();
    if n_oversized > 0 {
        warn!(
            "[IMPORT] {}: {n_oversized} item(s) exceed the container and will never be packed",
            instance.name
        );
    }

    Ok(instance)
}

pub fn import_container(ext_container: &ExtContainer) -> Container {
    Container {
        width: ext_container.width,
        height: ext_container.height,
    }
}

pub fn import_item(ext_item: &ExtItem) -> Item {
    Item::new(ext_item.id, ext_item.width, ext_item.height, ext_item.value)
}
