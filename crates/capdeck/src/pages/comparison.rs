//! Page 7: CapNet vs traditional approaches.

use capdeck_core::{
    color::Color,
    draw::{Align, CornerStyle, LabelBox, LineStyle, Note, Zone},
    geometry::{Point, Size},
    style::{RoleStyle, StyleRegistry},
};

use super::{ink, muted, tint};
use crate::{
    error::ComposeError,
    page::{Page, PageBuilder},
};

const COL_X: [f32; 5] = [0.05, 0.18, 0.35, 0.52, 0.72];
const COL_W: [f32; 5] = [0.12, 0.15, 0.15, 0.15, 0.22];

pub(super) fn compose(styles: &StyleRegistry) -> Result<Page, ComposeError> {
    let mut page = PageBuilder::new(
        "CAPNET vs TRADITIONAL APPROACHES",
        Some("Why existing solutions don't solve the agent authorization problem"),
        styles,
    )?;

    let allow = page.resolve("allow")?;
    let deny = page.resolve("deny")?;
    let trusted = page.resolve("trusted-zone")?;
    let white = tint("#FFFFFF")?;
    let partial = tint("#FF8F00")?;

    let headers: [(&str, RoleStyle); 4] = [
        ("API Keys /\nCredentials", RoleStyle::new(tint("#E53935")?, white)),
        ("OAuth\nScopes", RoleStyle::new(partial, white)),
        ("IAM /\nRBAC", RoleStyle::new(partial, white)),
        ("CAPNET", allow),
    ];

    for (i, (header, style)) in headers.iter().enumerate() {
        page.draw_box(
            LabelBox::new(
                Point::new(COL_X[i + 1], 0.82),
                Size::new(COL_W[i + 1], 0.06),
                *header,
                *style,
            )
            .with_font_size(8.0),
        )?;
    }

    let rows = [
        ("Scoped authority", ["✗", "~", "~", "✓"]),
        ("Time-bounded", ["✗", "~", "✗", "✓"]),
        ("Instant revocation", ["✗", "~", "~", "✓"]),
        ("Agent-specific binding", ["✗", "✗", "✗", "✓"]),
        ("Budget enforcement", ["✗", "✗", "✗", "✓"]),
        ("Category blocking", ["✗", "✗", "✗", "✓"]),
        ("Vendor allow-listing", ["✗", "✗", "✗", "✓"]),
        ("Delegation / attenuation", ["✗", "✗", "✗", "✓"]),
        ("Audit trail (receipts)", ["✗", "~", "~", "✓"]),
        ("Agent never sees creds", ["✗", "✗", "✗", "✓"]),
        ("Survives agent compromise", ["✗", "✗", "✗", "✓"]),
    ];

    for (i, (feature, values)) in rows.iter().enumerate() {
        let y = 0.76 - i as f32 * 0.055;
        let stripe = if i % 2 == 0 {
            tint("#F5F5F5")?
        } else {
            white
        };

        page.draw_zone(
            Zone::new(
                Point::new(0.04, y - 0.02),
                Size::new(0.92, 0.05),
                stripe,
                tint("#E0E0E0")?,
            )
            .with_edge_width(0.5)
            .with_line_style(LineStyle::Solid)
            .with_corner(CornerStyle::Square),
        )?;

        page.draw_note(
            Note::new(Point::new(0.05, y + 0.005), *feature, 9.0, ink()?)
                .bold()
                .with_align(Align::Left),
        )?;

        for (j, value) in values.iter().enumerate() {
            let vx = COL_X[j + 1] + COL_W[j + 1] / 2.0;
            let (color, font_size): (Color, f32) = match *value {
                "✓" => (allow.fill(), 14.0),
                "✗" => (deny.fill(), 14.0),
                _ => (partial, 12.0),
            };
            page.draw_note(
                Note::new(Point::new(vx, y + 0.005), *value, font_size, color).bold(),
            )?;
        }
    }

    page.draw_note(
        Note::new(Point::new(0.10, 0.135), "✓ = Full support", 9.0, allow.fill())
            .bold()
            .with_align(Align::Left),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.35, 0.135),
            "~ = Partial / limited",
            9.0,
            partial,
        )
        .bold()
        .with_align(Align::Left),
    )?;
    page.draw_note(
        Note::new(Point::new(0.60, 0.135), "✗ = Not supported", 9.0, deny.fill())
            .bold()
            .with_align(Align::Left),
    )?;

    page.draw_box(
        LabelBox::new(Point::new(0.10, 0.04), Size::new(0.80, 0.07), "", trusted)
            .with_opacity(0.95),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.085),
            "CapNet is purpose-built for the agent era.",
            12.0,
            allow.fill(),
        )
        .bold(),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.055),
            "OAuth answers \"who is this?\" — CapNet answers \"what can this agent do right now, and can I stop it?\"",
            9.0,
            muted()?,
        )
        .italic(),
    )?;

    Ok(page.finish())
}
