//! Page 1: system architecture overview with trust boundaries.

use capdeck_core::{
    draw::{Align, Arrow, Bubble, LabelBox, LineStyle, Note, Zone},
    geometry::{Offset, Point, Size},
    style::StyleRegistry,
};

use super::tint;
use crate::{
    error::ComposeError,
    page::{Page, PageBuilder},
};

pub(super) fn compose(styles: &StyleRegistry) -> Result<Page, ComposeError> {
    let mut page = PageBuilder::new(
        "CAPNET SYSTEM ARCHITECTURE",
        Some("Trust Boundaries & Component Roles"),
        styles,
    )?;

    let trusted = page.resolve("trusted-zone")?;
    let untrusted = page.resolve("untrusted-zone")?;
    let user = page.resolve("user")?;
    let extension = page.resolve("extension")?;
    let proxy = page.resolve("proxy")?;
    let agent = page.resolve("agent")?;
    let resource = page.resolve("resource")?;
    let custody = page.resolve("custody")?;

    // Trusted zone
    page.draw_zone(Zone::new(
        Point::new(0.03, 0.35),
        Size::new(0.94, 0.55),
        trusted.fill().with_alpha(0.5),
        tint("#4CAF50")?.with_alpha(0.5),
    ))?;
    page.draw_note(
        Note::new(Point::new(0.07, 0.87), "TRUSTED ZONE", 10.0, trusted.text())
            .bold()
            .with_align(Align::Left),
    )?;

    // Untrusted zone
    page.draw_zone(Zone::new(
        Point::new(0.03, 0.04),
        Size::new(0.94, 0.28),
        untrusted.fill().with_alpha(0.5),
        tint("#E53935")?.with_alpha(0.5),
    ))?;
    page.draw_note(
        Note::new(
            Point::new(0.07, 0.295),
            "UNTRUSTED ZONE",
            10.0,
            untrusted.text(),
        )
        .bold()
        .with_align(Align::Left),
    )?;

    page.draw_box(
        LabelBox::new(Point::new(0.05, 0.58), Size::new(0.18, 0.22), "USER", user)
            .with_sublabel("Sets policy\nControls revocation\nViews receipts"),
    )?;
    page.draw_box(
        LabelBox::new(
            Point::new(0.30, 0.58),
            Size::new(0.18, 0.22),
            "EXTENSION",
            extension,
        )
        .with_sublabel("Wallet UI\nAgent keypair\nTemplate config"),
    )?;
    page.draw_box(
        LabelBox::new(
            Point::new(0.55, 0.42),
            Size::new(0.20, 0.38),
            "PROXY",
            proxy,
        )
        .with_sublabel(
            "Issuer keys\nCapDoc storage\nRevocation list\nReceipt log\nEnforcement gate\nCredential vault",
        ),
    )?;
    page.draw_box(
        LabelBox::new(
            Point::new(0.78, 0.58),
            Size::new(0.18, 0.22),
            "KEY CUSTODY",
            custody,
        )
        .with_sublabel("Ed25519 issuer keypair\nMerchant credentials\nNEVER exposed\nto agents")
        .with_sublabel_size(7.0),
    )?;
    page.draw_box(
        LabelBox::new(
            Point::new(0.12, 0.08),
            Size::new(0.22, 0.18),
            "AGENT (AI)",
            agent,
        )
        .with_sublabel("Own keypair only\nNo credentials\nPropose-only access"),
    )?;
    page.draw_box(
        LabelBox::new(
            Point::new(0.60, 0.08),
            Size::new(0.22, 0.18),
            "RESOURCE",
            resource,
        )
        .with_sublabel("Merchant / API\nOnly reachable\nthrough proxy"),
    )?;

    // Control plane, left to right
    page.draw_arrow(
        Arrow::new(Point::new(0.23, 0.69), Point::new(0.30, 0.69), user.fill())
            .with_label("Config", Offset::new(0.0, 0.02)),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.48, 0.69),
            Point::new(0.55, 0.69),
            extension.fill(),
        )
        .with_label("Issue/Revoke", Offset::new(0.0, 0.02)),
    )?;
    page.draw_arrow(
        Arrow::new(
            Point::new(0.75, 0.69),
            Point::new(0.78, 0.69),
            proxy.fill(),
        )
        .with_width(1.5),
    )?;

    // Agent to proxy
    page.draw_arrow(
        Arrow::new(
            Point::new(0.34, 0.17),
            Point::new(0.55, 0.50),
            agent.fill(),
        )
        .with_label("Action\nRequest", Offset::new(-0.04, 0.02)),
    )?;

    // Proxy to resource
    page.draw_arrow(
        Arrow::new(
            Point::new(0.75, 0.50),
            Point::new(0.71, 0.26),
            proxy.fill(),
        )
        .with_label("Execute\n(if allowed)", Offset::new(0.06, 0.02)),
    )?;

    // Agent cannot reach the resource directly
    page.draw_arrow(
        Arrow::new(
            Point::new(0.34, 0.17),
            Point::new(0.60, 0.17),
            tint("#E53935")?,
        )
        .with_line_style(LineStyle::Dashed),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.47, 0.20),
            "BLOCKED",
            9.0,
            untrusted.text(),
        )
        .bold()
        .with_bubble(Bubble::new(tint("#FFCDD2")?, untrusted.text())),
    )?;

    Ok(page.finish())
}
