//! Page 5: the revocation flow — the kill switch.

use capdeck_core::{
    draw::{Arrow, Bubble, HeadStyle, LabelBox, LineStyle, Note},
    geometry::{Offset, Point, Size},
    style::StyleRegistry,
};

use super::{muted, tint};
use crate::{
    error::ComposeError,
    page::{Page, PageBuilder},
};

pub(super) fn compose(styles: &StyleRegistry) -> Result<Page, ComposeError> {
    let mut page = PageBuilder::new(
        "REVOCATION FLOW — KILL SWITCH",
        Some("Instant capability termination"),
        styles,
    )?;

    let user = page.resolve("user")?;
    let extension = page.resolve("extension")?;
    let proxy = page.resolve("proxy")?;
    let agent = page.resolve("agent")?;
    let deny = page.resolve("deny")?;
    let insight = page.resolve("insight")?;

    let actors = [
        (0.12, "USER", user),
        (0.32, "EXTENSION", extension),
        (0.55, "PROXY", proxy),
        (0.80, "AGENT", agent),
    ];

    for (cx, label, style) in &actors {
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
            Arrow::new(Point::new(*cx, 0.08), Point::new(*cx, 0.84), style.fill())
                .with_width(1.5)
                .with_head(HeadStyle::None)
                .with_line_style(LineStyle::Dashed)
                .with_opacity(0.3),
        )?;
    }

    // User pulls the switch
    page.draw_note(
        Note::new(Point::new(0.12, 0.76), "Clicks\n\"Revoke\"", 9.0, user.fill())
            .bold()
            .with_bubble(Bubble::new(tint("#E3F2FD")?, user.fill())),
    )?;
    page.draw_arrow(
        Arrow::new(Point::new(0.19, 0.76), Point::new(0.25, 0.76), user.fill()).with_width(2.5),
    )?;

    // Extension relays to the proxy
    page.draw_arrow(
        Arrow::new(
            Point::new(0.32, 0.74),
            Point::new(0.32, 0.70),
            extension.fill(),
        )
        .with_width(1.5),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.39, 0.68),
            Point::new(0.48, 0.68),
            extension.fill(),
        )
        .with_width(2.5)
        .with_label("POST /capability/revoke", Offset::new(0.0, 0.02)),
    )?;

    page.draw_note(
        Note::new(
            Point::new(0.55, 0.56),
            "Proxy:\n• Marks cap REVOKED\n• Persists to disk\n  (survives restart)\n• Emits CAP_REVOKED\n  receipt",
            9.0,
            proxy.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#F3E5F5")?, proxy.fill())),
    )?;

    // Confirmation travels back
    page.draw_arrow(
        Arrow::new(Point::new(0.48, 0.48), Point::new(0.39, 0.48), proxy.fill())
            .with_label("Confirmed", Offset::new(0.0, 0.02)),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.25, 0.48),
            Point::new(0.19, 0.48),
            extension.fill(),
        )
        .with_label("\"Revoked\"", Offset::new(0.0, 0.02)),
    )?;

    page.draw_note(
        Note::new(
            Point::new(0.50, 0.34),
            "· · ·  LATER  · · ·",
            12.0,
            tint("#9E9E9E")?,
        )
        .bold(),
    )?;

    // The agent tries anyway
    page.draw_note(
        Note::new(
            Point::new(0.80, 0.28),
            "Agent tries\nany action",
            9.0,
            agent.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#FFF3E0")?, agent.fill())),
    )?;
    page.draw_arrow(
        Arrow::new(Point::new(0.73, 0.28), Point::new(0.62, 0.28), agent.fill())
            .with_width(2.5)
            .with_label("POST /action/request", Offset::new(0.0, 0.02)),
    )?;

    page.draw_note(
        Note::new(
            Point::new(0.55, 0.20),
            "Step 4 in pipeline:\nCHECK REVOCATION\n→ REVOKED",
            9.0,
            deny.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#FFEBEE")?, deny.fill())),
    )?;
    page.draw_arrow(
        Arrow::new(Point::new(0.62, 0.14), Point::new(0.73, 0.14), deny.fill())
            .with_width(2.5)
            .with_label("DENIED: REVOKED", Offset::new(0.0, 0.02)),
    )?;

    page.draw_box(
        LabelBox::new(
            Point::new(0.68, 0.06),
            Size::new(0.24, 0.05),
            "AGENT IS DONE",
            deny,
        )
        .with_sublabel("No action possible. Period."),
    )?;

    page.draw_box(
        LabelBox::new(Point::new(0.05, 0.06), Size::new(0.55, 0.05), "", insight)
            .with_opacity(0.95),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.325, 0.085),
            "Revocation is instant, persistent, and absolute.",
            10.0,
            insight.text(),
        )
        .bold(),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.325, 0.065),
            "No matter what the agent tries — it's over.",
            8.0,
            muted()?,
        )
        .italic(),
    )?;

    Ok(page.finish())
}
