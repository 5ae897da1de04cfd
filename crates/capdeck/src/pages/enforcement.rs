//! Page 3: the enforcement decision tree.

use capdeck_core::{
    draw::{Arrow, Bubble, LabelBox, Note},
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
        "ENFORCEMENT DECISION TREE",
        Some("Every action request passes through this pipeline — no exceptions"),
        styles,
    )?;

    let proxy = page.resolve("proxy")?;
    let agent = page.resolve("agent")?;
    let allow = page.resolve("allow")?;
    let deny = page.resolve("deny")?;
    let receipt = page.resolve("receipt")?;
    let check_yes = page.resolve("check-yes")?;
    let check_no = page.resolve("check-no")?;

    let checks = [
        (
            0.82,
            "VERIFY\nSIGNATURE",
            "Is the request\ncryptographically authentic?",
            "INVALID_SIGNATURE",
        ),
        (
            0.70,
            "VERIFY\nEXECUTOR",
            "Does agent pubkey match\nthe capability binding?",
            "EXECUTOR_MISMATCH",
        ),
        (
            0.58,
            "CHECK\nTIME WINDOW",
            "Is capability within\nnot_before / expires_at?",
            "TIME_EXPIRED",
        ),
        (
            0.46,
            "CHECK\nREVOCATION",
            "Has the user\nrevoked this capability?",
            "REVOKED",
        ),
        (
            0.34,
            "CHECK\nVENDOR",
            "Is the target vendor\non the allow-list?",
            "VENDOR_NOT_ALLOWED",
        ),
        (
            0.22,
            "CHECK\nCATEGORIES",
            "Are all cart items in\nallowed categories?",
            "CATEGORY_BLOCKED",
        ),
        (
            0.10,
            "CHECK\nBUDGET",
            "Is total amount ≤\nmax_amount_cents?",
            "AMOUNT_EXCEEDS_MAX",
        ),
    ];

    // Incoming request feeds the first check
    page.draw_arrow(
        Arrow::new(Point::new(0.22, 0.91), Point::new(0.22, 0.88), agent.fill()).with_width(3.0),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.22, 0.915),
            "INCOMING ACTION REQUEST",
            10.0,
            agent.fill(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#FFF3E0")?, agent.fill())),
    )?;

    let deny_x = 0.70;
    for (i, (y, check_name, question, deny_reason)) in checks.iter().enumerate() {
        page.draw_box(
            LabelBox::new(
                Point::new(0.12, y - 0.04),
                Size::new(0.20, 0.08),
                *check_name,
                proxy,
            )
            .with_font_size(8.0),
        )?;

        page.draw_note(
            Note::new(Point::new(0.45, *y), *question, 8.0, ink()?)
                .with_bubble(Bubble::new(tint("#FFFFFF")?, tint("#BDBDBD")?)),
        )?;

        if i < checks.len() - 1 {
            let next_y = checks[i + 1].0;
            page.draw_arrow(
                Arrow::new(
                    Point::new(0.22, y - 0.04),
                    Point::new(0.22, next_y + 0.04),
                    check_yes.fill(),
                )
                .with_width(2.5),
            )?;
            page.draw_note(
                Note::new(
                    Point::new(0.19, (y - 0.04 + next_y + 0.04) / 2.0),
                    "PASS",
                    7.0,
                    check_yes.fill(),
                )
                .bold()
                .with_bubble(Bubble::new(tint("#E8F5E9")?, check_yes.fill())),
            )?;
        }

        page.draw_arrow(Arrow::new(
            Point::new(0.32, *y),
            Point::new(deny_x, *y),
            check_no.fill(),
        ))?;
        page.draw_note(
            Note::new(Point::new(0.51, y + 0.015), "FAIL", 7.0, check_no.fill())
                .bold()
                .with_bubble(Bubble::new(tint("#FFEBEE")?, check_no.fill())),
        )?;

        page.draw_box(
            LabelBox::new(
                Point::new(deny_x, y - 0.025),
                Size::new(0.24, 0.05),
                format!("DENIED: {deny_reason}"),
                deny,
            )
            .with_font_size(7.0),
        )?;
        page.draw_note(
            Note::new(
                Point::new(deny_x + 0.12, y - 0.04),
                "+ receipt emitted",
                6.0,
                tint("#F57F17")?,
            )
            .italic(),
        )?;
    }

    page.draw_box(
        LabelBox::new(Point::new(0.10, 0.02), Size::new(0.24, 0.05), "ALLOWED", allow)
            .with_font_size(12.0),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.22, 0.06),
            Point::new(0.22, 0.07),
            check_yes.fill(),
        )
        .with_width(2.5),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.22, 0.005),
            "Execute action + emit receipt",
            8.0,
            allow.fill(),
        )
        .bold(),
    )?;

    page.draw_box(
        LabelBox::new(Point::new(0.70, 0.02), Size::new(0.24, 0.05), "", receipt)
            .with_opacity(0.3),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.82, 0.045),
            "EVERY PATH EMITS A RECEIPT",
            8.0,
            tint("#E65100")?,
        )
        .bold(),
    )?;
    page.draw_note(Note::new(
        Point::new(0.82, 0.025),
        "Allow or deny — full audit trail",
        7.0,
        muted()?,
    ))?;

    Ok(page.finish())
}
