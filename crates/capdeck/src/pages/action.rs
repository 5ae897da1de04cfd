//! Page 4: the agent action sequence.

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
        "AGENT ACTION FLOW",
        Some("What happens when an agent tries to take an action"),
        styles,
    )?;

    let agent = page.resolve("agent")?;
    let proxy = page.resolve("proxy")?;
    let resource = page.resolve("resource")?;
    let allow = page.resolve("allow")?;
    let deny = page.resolve("deny")?;
    let insight = page.resolve("insight")?;

    let actors = [
        (0.15, "AGENT", agent),
        (0.45, "PROXY", proxy),
        (0.75, "RESOURCE", resource),
    ];

    for (cx, label, style) in &actors {
        page.draw_box(LabelBox::new(
            Point::new(cx - 0.08, 0.84),
            Size::new(0.16, 0.05),
            *label,
            *style,
        ))?;
        page.draw_arrow(
            Arrow::new(Point::new(*cx, 0.06), Point::new(*cx, 0.84), style.fill())
                .with_head(HeadStyle::None)
                .with_line_style(LineStyle::Dashed)
                .with_opacity(0.3),
        )?;
    }

    page.draw_arrow(
        Arrow::new(Point::new(0.15, 0.78), Point::new(0.45, 0.78), agent.fill())
            .with_width(2.5)
            .with_label(
                "POST /action/request\n{cart, agent_id, pubkey, signature}",
                Offset::new(0.0, 0.02),
            ),
    )?;

    page.draw_note(
        Note::new(
            Point::new(0.45, 0.68),
            "ENFORCEMENT PIPELINE\n1. Verify signature\n2. Verify executor binding\n3. Check time window\n4. Check revocation\n5. Check vendor\n6. Check categories\n7. Check budget",
            8.0,
            proxy.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#F3E5F5")?, proxy.fill())),
    )?;

    page.draw_arrow(
        Arrow::new(Point::new(0.45, 0.50), Point::new(0.75, 0.50), allow.fill())
            .with_width(2.5)
            .with_label(
                "Execute action\n(credentials held by proxy)",
                Offset::new(0.0, 0.02),
            ),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.75, 0.44),
            Point::new(0.45, 0.44),
            resource.fill(),
        )
        .with_width(2.5)
        .with_label("Result", Offset::new(0.0, 0.02)),
    )?;
    page.draw_arrow(
        Arrow::new(Point::new(0.45, 0.38), Point::new(0.15, 0.38), allow.fill())
            .with_width(2.5)
            .with_label("ALLOWED + receipt_id", Offset::new(0.0, 0.02)),
    )?;

    // Denied branch
    page.draw_arrow(
        Arrow::new(Point::new(0.45, 0.55), Point::new(0.45, 0.58), deny.fill())
            .with_head(HeadStyle::None),
    )?;
    page.draw_arrow(
        Arrow::new(Point::new(0.45, 0.30), Point::new(0.15, 0.30), deny.fill())
            .with_width(2.5)
            .with_label("DENIED + reason + receipt_id", Offset::new(0.0, 0.02)),
    )?;
    page.draw_note(
        Note::new(Point::new(0.45, 0.275), "OR", 10.0, deny.fill())
            .bold()
            .with_bubble(Bubble::new(tint("#FFEBEE")?, deny.fill())),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.75, 0.30),
            "Resource NEVER\ncontacted",
            9.0,
            deny.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#FFEBEE")?, deny.fill())),
    )?;

    page.draw_box(
        LabelBox::new(Point::new(0.10, 0.06), Size::new(0.80, 0.10), "", insight)
            .with_opacity(0.95),
    )?;
    page.draw_note(
        Note::new(Point::new(0.50, 0.13), "AUDIT TRAIL", 12.0, insight.text()).bold(),
    )?;
    page.draw_note(Note::new(
        Point::new(0.50, 0.10),
        "Every request generates a signed receipt: ACTION_ATTEMPT → ACTION_ALLOWED or ACTION_DENIED",
        9.0,
        muted()?,
    ))?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.075),
            "\"Why did this happen?\" is always answerable.",
            8.0,
            muted()?,
        )
        .italic(),
    )?;

    Ok(page.finish())
}
