//! Page 2: capability issuance flow.

use capdeck_core::{
    color::Color,
    draw::{Arrow, Bubble, HeadStyle, LabelBox, LineStyle, Marker, Note},
    geometry::{Point, Size},
    style::StyleRegistry,
};

use super::{ink, muted, tint};
use crate::{
    error::ComposeError,
    page::{Page, PageBuilder},
};

pub(super) fn compose(styles: &StyleRegistry) -> Result<Page, ComposeError> {
    let mut page = PageBuilder::new(
        "CAPABILITY ISSUANCE FLOW",
        Some("How a capability is created and bound to an agent"),
        styles,
    )?;

    let header = page.resolve("header")?;
    let insight = page.resolve("insight")?;

    let columns = [
        (0.10, "USER", page.resolve("user")?),
        (0.32, "EXTENSION", page.resolve("extension")?),
        (0.55, "PROXY", page.resolve("proxy")?),
        (0.78, "AGENT", page.resolve("agent")?),
    ];

    for (cx, label, style) in &columns {
        page.draw_box(
            LabelBox::new(
                Point::new(cx - 0.07, 0.84),
                Size::new(0.14, 0.05),
                *label,
                *style,
            )
            .with_font_size(10.0),
        )?;
        page.draw_arrow(
            Arrow::new(Point::new(*cx, 0.10), Point::new(*cx, 0.84), style.fill())
                .with_width(1.5)
                .with_head(HeadStyle::None)
                .with_line_style(LineStyle::Dashed)
                .with_opacity(0.3),
        )?;
    }

    // (y, step number, text, source column, destination column, arrow color)
    let steps: [(f32, &str, &str, f32, f32, Option<Color>); 6] = [
        (
            0.78,
            "1",
            "User sets policy template:\n\"$200, groceries, no alcohol, 7 days\"",
            0.10,
            0.10,
            None,
        ),
        (
            0.70,
            "2",
            "Extension sends\nPOST /capability/issue\nwith policy + agent pubkey",
            0.32,
            0.55,
            Some(tint("#4CAF50")?),
        ),
        (
            0.58,
            "3",
            "Proxy creates CapDoc:\n• Generates cap_id\n• Sets constraints from policy\n• Binds to agent pubkey\n• Signs with issuer key\n• Stores locally\n• Emits CAP_ISSUED receipt",
            0.55,
            0.55,
            None,
        ),
        (
            0.42,
            "4",
            "Returns signed CapDoc",
            0.55,
            0.32,
            Some(tint("#6A1B9A")?),
        ),
        (
            0.36,
            "5",
            "Shows \"Capability Active\"\nwith details + revoke button",
            0.32,
            0.10,
            Some(tint("#2E7D32")?),
        ),
        (
            0.24,
            "6",
            "Agent knows:\n✓ A capability exists for it\n✓ Its own keypair\n✗ Merchant credentials\n✗ Issuer signing key",
            0.78,
            0.78,
            None,
        ),
    ];

    for (sy, number, text, src_x, dst_x, arrow_color) in steps {
        page.draw_marker(Marker::new(Point::new(0.03, sy), number, header))?;

        let text_x = if src_x == dst_x {
            src_x
        } else {
            (src_x + dst_x) / 2.0
        };
        page.draw_note(
            Note::new(Point::new(text_x, sy), text, 8.0, ink()?).with_bubble(Bubble::new(
                tint("#FFFFFF")?.with_alpha(0.95),
                tint("#BDBDBD")?,
            )),
        )?;

        if let Some(color) = arrow_color {
            page.draw_arrow(
                Arrow::new(
                    Point::new(src_x, sy - 0.02),
                    Point::new(dst_x, sy - 0.02),
                    color,
                )
                .with_width(2.5),
            )?;
        }
    }

    page.draw_box(
        LabelBox::new(Point::new(0.15, 0.10), Size::new(0.70, 0.08), "", insight)
            .with_opacity(0.95),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.14),
            "KEY INSIGHT: The agent receives authority (capability), NOT credentials.",
            10.0,
            insight.text(),
        )
        .bold(),
    )?;
    page.draw_note(Note::new(
        Point::new(0.50, 0.115),
        "Even if the agent is fully compromised, it cannot exceed the capability's constraints.",
        8.0,
        muted()?,
    ))?;

    Ok(page.finish())
}
