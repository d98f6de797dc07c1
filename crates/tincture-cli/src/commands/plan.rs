//! Plan command: list what every archive entry will contain.

use crate::config::Settings;
use crate::PlanArgs;
use anyhow::Result;
use serde::Serialize;
use tincture_core::{ColorMode, VariantKind, VariantSpec};
use tincture_io::{archive::entry_name, OutputFormat};
use tincture_ops::variant_plan;

/// One row of the plan.
#[derive(Debug, Serialize)]
struct PlanEntry {
    index: usize,
    entry: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    invert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<String>,
}

impl PlanEntry {
    fn new(spec: &VariantSpec, format: &OutputFormat, mode: ColorMode) -> Self {
        let (kind, invert, order) = match &spec.kind {
            VariantKind::Channels { invert, order } => {
                ("channels", Some(invert.to_string()), Some(order.label(mode)))
            }
            VariantKind::Grayscale => ("grayscale", None, None),
            VariantKind::GrayscaleInverted => ("grayscale_inverted", None, None),
        };
        Self {
            index: spec.index,
            entry: entry_name(spec.index, format),
            kind,
            invert,
            order,
        }
    }
}

fn build(plan: &[VariantSpec], settings: &Settings) -> Vec<PlanEntry> {
    plan.iter()
        .map(|spec| PlanEntry::new(spec, &settings.format, settings.mode))
        .collect()
}

/// Runs the plan command.
pub fn run(args: PlanArgs, settings: &Settings) -> Result<()> {
    let plan = variant_plan(settings.mode);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&build(&plan, settings))?);
        return Ok(());
    }

    if settings.verbose {
        let labels: String = settings.mode.labels().iter().collect();
        println!("{} entries, {} mode, channels {}", plan.len(), settings.mode, labels);
    }
    for spec in &plan {
        println!(
            "{:<10} {}",
            entry_name(spec.index, &settings.format),
            spec.describe(settings.mode)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_plan() {
        let settings = Settings::from_args(false, false, "PNG", "rgb").unwrap();
        let entries = build(&variant_plan(settings.mode), &settings);
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].entry, "0.png");
        assert_eq!(entries[0].invert.as_deref(), Some("---"));
        assert_eq!(entries[5].order.as_deref(), Some("bgr"));
        assert_eq!(entries[48].kind, "grayscale");
        assert_eq!(entries[49].entry, "49.png");
    }

    #[test]
    fn test_cmyk_plan_json() {
        let settings = Settings::from_args(false, false, "JPEG", "cmyk").unwrap();
        let entries = build(&variant_plan(settings.mode), &settings);
        assert_eq!(entries.len(), 96);
        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(json["entry"], "1.jpeg");
        assert_eq!(json["invert"], "----");
        assert_eq!(json["order"], "cym");

        let gray = PlanEntry::new(
            &VariantSpec {
                index: 48,
                kind: VariantKind::Grayscale,
            },
            &settings.format,
            ColorMode::Rgb,
        );
        let json = serde_json::to_value(&gray).unwrap();
        assert!(json.get("invert").is_none());
    }
}
