// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the demos.

use understory_headless::overlay::{FloatingConfig, Portal, PortalTarget, Positioner, Teardown};

/// Install a formatting subscriber.
///
/// `RUST_LOG` wins when set; otherwise the engines log at `debug`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,understory=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().without_time().with_target(true))
        .init();
}

/// A positioner and portal that only print what they would do.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintingOverlay;

impl Positioner for PrintingOverlay {
    fn attach(&mut self, anchor: &str, floating: &str, config: &FloatingConfig) -> Teardown {
        println!("  position {floating} {:?} of {anchor}", config.placement);
        let floating = floating.to_owned();
        Teardown::new(move || println!("  stop positioning {floating}"))
    }
}

impl Portal for PrintingOverlay {
    fn mount(&mut self, element: &str, target: &PortalTarget) -> Teardown {
        println!("  portal {element} into {target:?}");
        let element = element.to_owned();
        Teardown::new(move || println!("  return {element} from portal"))
    }
}
