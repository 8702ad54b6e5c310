//! Headless run of the Triforce sample: animates three spinning triangles and logs their
//! clip-space vertices every frame.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use crate::{config::Config, triforce::Triforce};
use anyhow::{bail, Result};
use tracing::{debug, info};

mod config;
mod trace;
mod triforce;

fn main() -> Result<()> {
    trace::initialize();

    let config = Config::new();
    debug!(?config, "loaded configuration");
    if config.window_width == 0 || config.window_height == 0 {
        bail!(
            "window size must be non-zero, got {}x{}",
            config.window_width,
            config.window_height
        );
    }
    if config.target_fps == 0 {
        bail!("TARGET_FPS must be non-zero");
    }

    let mut triforce = Triforce::new(config.degrees_per_second);
    if config.paused {
        triforce.toggle();
    }
    triforce.resize(config.window_width, config.window_height);
    info!(
        frames = config.frames,
        playing = triforce.is_playing(),
        "running {}x{} at {} fps",
        config.window_width,
        config.window_height,
        config.target_fps
    );
    debug!(projection = ?triforce.projection().to_cols_array(), "projection upload");

    let delta = config.frame_delta();
    for frame in 0..config.frames {
        if config.reset_frame == Some(frame) {
            triforce.reset();
            info!(frame, "animation reset");
        }
        triforce.animate(delta);
        for triangle in triforce.frame() {
            let [a, b, c] = triangle.vertices;
            info!(
                "frame {frame} t={:.3}s {:>5}: {a} {b} {c}",
                triforce.anim_time(),
                triangle.label
            );
            debug!(upload = ?triangle.transform.to_cols_array(), triangle = triangle.label);
        }
    }

    Ok(())
}
