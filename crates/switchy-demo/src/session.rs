//! Headless gallery session: scripted clicks, frame simulation, reports.

use crate::config::GalleryConfig;
use crate::error::{ConfigError, DemoError};
use crate::gallery::Gallery;
use serde::Serialize;
use std::io::Write;
use switchy::{DrawCommand, Rect, Widget};
use switchy_test::Harness;
use tracing::{debug, info};

/// Final state of one gallery item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    /// Test id
    pub id: String,
    /// Caption
    pub caption: String,
    /// Variant type name
    pub variant: &'static str,
    /// Stored state
    pub checked: bool,
    /// Laid-out switch bounds
    pub bounds: Rect,
}

/// A mounted gallery driven at the config's frame rate.
pub struct Session {
    harness: Harness<Gallery>,
    dt: f64,
    frames: usize,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("harness", &self.harness)
            .field("dt", &self.dt)
            .field("frames", &self.frames)
            .finish()
    }
}

impl Session {
    /// Build and mount the gallery described by `config`.
    pub fn new(config: &GalleryConfig) -> Result<Self, ConfigError> {
        let gallery = Gallery::from_config(config)?;
        let harness =
            Harness::with_viewport(gallery, config.viewport.width, config.viewport.height);
        Ok(Self {
            harness,
            dt: config.frame_dt(),
            frames: 0,
        })
    }

    /// The mounted gallery.
    pub const fn gallery(&self) -> &Gallery {
        self.harness.root()
    }

    /// The underlying harness.
    pub const fn harness(&self) -> &Harness<Gallery> {
        &self.harness
    }

    /// Frames simulated so far.
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Click the switch with test id `id`, then run an update pass.
    pub fn click(&mut self, id: &str) -> Result<(), DemoError> {
        self.harness.try_click(&format!("#{id}"))?;
        self.harness.relayout();
        debug!(id, "scripted click");
        Ok(())
    }

    /// Simulate up to `frames` frames, stopping early once nothing animates.
    /// Returns the frames actually run.
    pub fn run(&mut self, frames: usize) -> usize {
        let mut run = 0;
        while run < frames {
            run += 1;
            if !self.harness.root_mut().animate(self.dt) {
                break;
            }
        }
        self.frames += run;
        info!(run, total = self.frames, "frames simulated");
        run
    }

    /// State of every item, in display order.
    pub fn report(&self) -> Vec<ItemReport> {
        self.gallery()
            .items()
            .iter()
            .map(|item| ItemReport {
                id: item.id.clone(),
                caption: item.caption.clone(),
                variant: item.variant.name(),
                checked: item.state.get(),
                bounds: self
                    .harness
                    .bounds_of(&format!("#{}", item.id))
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Draw list for the current frame.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        self.harness.paint().take_commands()
    }

    /// Write the textual summary, one line per item.
    pub fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        let root = self.gallery().bounds();
        writeln!(
            out,
            "gallery {}x{} after {} frames",
            root.width, root.height, self.frames
        )?;
        for item in self.report() {
            let b = item.bounds;
            writeln!(
                out,
                "  {:<18} {:<15} {:<4} ({}, {}, {}x{})  {}",
                item.id,
                item.variant,
                if item.checked { "on" } else { "off" },
                b.x,
                b.y,
                b.width,
                b.height,
                item.caption
            )?;
        }
        Ok(())
    }

    /// Write the draw list as pretty JSON.
    pub fn write_json(&self, out: &mut impl Write) -> Result<(), DemoError> {
        serde_json::to_writer_pretty(&mut *out, &self.draw_list())?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&GalleryConfig::default()).unwrap()
    }

    // ===== Clicks =====

    #[test]
    fn test_click_updates_report() {
        let mut s = session();
        s.click("iswitch").unwrap();
        let report = s.report();
        assert!(report.iter().find(|r| r.id == "iswitch").unwrap().checked);
        assert_eq!(report.iter().filter(|r| r.checked).count(), 1);
    }

    #[test]
    fn test_click_twice_restores() {
        let mut s = session();
        s.click("morphing-switch").unwrap();
        s.click("morphing-switch").unwrap();
        assert!(s.report().iter().all(|r| !r.checked));
    }

    #[test]
    fn test_click_unknown_id() {
        let mut s = session();
        let err = s.click("nope").unwrap_err();
        assert!(matches!(err, DemoError::Click(_)));
    }

    // ===== Frames =====

    #[test]
    fn test_run_stops_when_settled() {
        let mut s = session();
        let warmup = s.run(600);
        assert_eq!(s.run(100), 1);
        s.click("colored-switch").unwrap();
        let run = s.run(600);
        assert!(run > 1 && run < 600);
        assert_eq!(s.frames(), warmup + 1 + run);
    }

    #[test]
    fn test_settled_draw_list_is_stable() {
        let mut s = session();
        s.click("text-switch").unwrap();
        s.run(600);
        assert_eq!(s.draw_list(), s.draw_list());
        assert!(!s.draw_list().is_empty());
    }

    // ===== Output =====

    #[test]
    fn test_summary_lists_every_item() {
        let mut s = session();
        s.click("square-switch").unwrap();
        let mut out = Vec::new();
        s.write_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("gallery 400x"));
        assert_eq!(lines.len(), 12);
        let square = lines.iter().find(|l| l.contains("square-switch")).unwrap();
        assert!(square.contains(" on "));
        assert!(square.ends_with("Square Switch"));
    }

    #[test]
    fn test_json_is_a_draw_list() {
        let s = session();
        let mut out = Vec::new();
        s.write_json(&mut out).unwrap();
        let back: Vec<DrawCommand> = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, s.draw_list());
    }
}
