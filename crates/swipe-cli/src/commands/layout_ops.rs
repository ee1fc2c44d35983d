use serde::Serialize;
use swipe_core::settings::Settings;

use super::{build_keyboard, CliError};

#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub label: String,
    pub ch: char,
    pub row: usize,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub width: f32,
    pub height: f32,
    pub longest_key_span: usize,
    pub keys: Vec<KeyReport>,
}

pub fn layout_report(
    settings: &Settings,
    width: f32,
    glyph_height: f32,
) -> Result<LayoutReport, CliError> {
    let kb = build_keyboard(settings, width, glyph_height)?;
    let keys = kb
        .keys()
        .map(|k| {
            let r = k.rect();
            KeyReport {
                label: k.label().to_string(),
                ch: k.ch(),
                row: k.row(),
                left: r.left,
                top: r.top,
                width: r.width,
                height: r.height,
            }
        })
        .collect();
    Ok(LayoutReport {
        width: kb.rect().width,
        height: kb.rect().height,
        longest_key_span: kb.longest_key_span(),
        keys,
    })
}

pub fn layout(settings: &Settings, width: f32, glyph_height: f32, json: bool) -> Result<(), CliError> {
    let report = layout_report(settings, width, glyph_height)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!(
        "Keyboard {}x{} (longest row {})",
        report.width, report.height, report.longest_key_span
    );
    let mut row = usize::MAX;
    for k in &report.keys {
        if k.row != row {
            row = k.row;
            println!("row {row}:");
        }
        println!(
            "  {:<3} x={:>8.1} y={:>7.1} w={:>6.1} h={:>6.1}",
            k.label, k.left, k.top, k.width, k.height
        );
    }
    Ok(())
}
