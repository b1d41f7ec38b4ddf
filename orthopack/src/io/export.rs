use crate::entities::{Container, Instance, Layout, PlacedItem};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem, ExtLayout, ExtPlacedItem, ExtSolution};
use std::time::Duration;

/// Exports a solution, given as the permutation it was generated from and its layout, out of the library
pub fn export(
    instance: &Instance,
    permutation: &[usize],
    layout: &Layout,
    run_time: Duration,
) -> ExtSolution {
    ExtSolution {
        value: layout.value(),
        density: layout.density(),
        n_placed: layout.n_placed(),
        n_items: instance.n_items(),
        permutation: permutation.to_vec(),
        layout: export_layout(layout),
        run_time_sec: run_time.as_secs_f64(),
    }
}

pub fn export_layout(layout: &Layout) -> ExtLayout {
    ExtLayout {
        container: export_container(&layout.container),
        placed_items: layout.placed_items().iter().map(export_placed_item).collect(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        item_id: pi.item_id,
        x: pi.x(),
        y: pi.y(),
        width: pi.width(),
        height: pi.height(),
        value: pi.value,
    }
}

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        width: container.width,
        height: container.height,
    }
}

/// Exports an internal instance, with every item value already resolved
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        name: instance.name.clone(),
        container: export_container(&instance.container),
        items: instance
            .items()
            .iter()
            .map(|i| ExtItem {
                id: i.id(),
                width: i.width(),
                height: i.height(),
                value: i.value(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;
    use crate::placement::place;
    use float_cmp::approx_eq;

    #[test]
    fn exported_solution_mirrors_layout() {
        let items = vec![Item::new(0, 6, 4, 0.0), Item::new(1, 4, 6, 0.0), Item::new(2, 20, 1, 0.0)];
        let instance = Instance::try_new(
            "export",
            Container {
                width: 10,
                height: 10,
            },
            items,
        )
        .unwrap();
        let (_, layout) = place(&instance, &[0, 1, 2]);
        let sol = export(&instance, &[0, 1, 2], &layout, Duration::from_millis(1500));

        assert_eq!(sol.value, 48.0);
        assert_eq!(sol.n_placed, 2);
        assert_eq!(sol.n_items, 3);
        assert!(approx_eq!(f64, sol.run_time_sec, 1.5));
        assert_eq!(
            sol.layout.placed_items[1],
            ExtPlacedItem {
                item_id: 1,
                x: 6,
                y: 0,
                width: 4,
                height: 6,
                value: 24.0,
            }
        );
        assert!(approx_eq!(f64, sol.density, 0.48, ulps = 2));
    }

    #[test]
    fn exported_instance_has_resolved_values() {
        let items = vec![Item::new(0, 3, 2, 0.0), Item::new(1, 1, 1, 7.5)];
        let instance = Instance::try_new("resolved", Container { width: 4, height: 4 }, items).unwrap();
        let ext = export_instance(&instance);

        assert_eq!(ext.items.iter().map(|i| i.value).collect::<Vec<_>>(), vec![6.0, 7.5]);
        let reimported = crate::io::import::import(&ext).unwrap();
        assert_eq!(reimported.items(), instance.items());
    }
}
