//! Builds the SnapAndSend proposal deck.
//!
//! ```text
//! cargo run --example proposal -- --output SnapAndSend_Proposal.pptx --verify
//! RUST_LOG=debug cargo run --example proposal -- --script deck.yaml
//! ```

use clap::Parser;
use slidesmith::{
    ContentItem, Deck, DeckProperties, DeckScript, LayoutEngine, PptxWriter, PresentationSummary,
    Theme, WorkflowStep,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proposal")]
#[command(about = "Write the SnapAndSend proposal deck as a .pptx file")]
struct Cli {
    /// Output file
    #[arg(short, long, default_value = "SnapAndSend_Proposal.pptx")]
    output: PathBuf,

    /// Build from a YAML deck script instead of the built-in proposal
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Reopen the written file and check it against the deck
    #[arg(long)]
    verify: bool,
}

fn detailed(items: &[(&str, &str)]) -> Vec<ContentItem> {
    items
        .iter()
        .map(|(title, desc)| ContentItem::detailed(*title, *desc))
        .collect()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn steps(items: &[(&str, &str)]) -> Vec<WorkflowStep> {
    items
        .iter()
        .map(|(title, desc)| WorkflowStep::new(*title, *desc))
        .collect()
}

fn proposal_theme() -> Theme {
    Theme::default()
        .with_footer_label("© Tech84")
        .with_title_footer("© Tech84 | Community Incident Reporting Platform")
}

fn proposal_deck(engine: &LayoutEngine) -> slidesmith::Result<Deck> {
    let mut deck = Deck::new();
    deck.set_properties(DeckProperties {
        title: Some("SnapAndSend & Incident Response".to_string()),
        creator: Some("Tech84".to_string()),
        subject: Some("Community Incident Reporting Platform".to_string()),
        created: None,
    });

    engine.title_slide(
        &mut deck,
        "SnapAndSend & Incident Response",
        "A Community-Powered Incident Reporting & Resolution Platform",
    )?;

    engine.section_slide(&mut deck, "Executive Summary")?;

    engine.content_slide(
        &mut deck,
        "The Problem We're Solving",
        &detailed(&[
            ("Delayed Incident Reporting", "Traditional reporting methods are slow, bureaucratic, and often ignored"),
            ("Lack of Transparency", "Citizens don't know if their reports are being addressed or the status of resolution"),
            ("Unverified Reports", "Authorities struggle to prioritize genuine incidents from false reports"),
            ("No Accountability", "No tracking of response times or resolution effectiveness"),
            ("Communication Gap", "Disconnect between community members and responding authorities"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Our Solution: Two Integrated Applications",
        &detailed(&[
            ("SnapAndSend (Community App)", "Mobile-first PWA for citizens to report incidents with photos, location, and real-time verification"),
            ("Incident Response (Authority Dashboard)", "Comprehensive dashboard for police/authorities to manage, investigate, and resolve reported incidents"),
            ("Seamless Integration", "Real-time sync via webhooks and External API for third-party systems integration"),
            ("AI-Powered Analysis", "Automatic incident categorization and duplicate detection using computer vision"),
        ]),
    )?;

    engine.two_column_slide(
        &mut deck,
        "Platform Overview",
        "SnapAndSend (Citizens)",
        &lines(&[
            "Report incidents with photo evidence",
            "GPS-based location tagging",
            "AI-powered category detection",
            "Community verification system",
            "Track report status in real-time",
            "View nearby incidents on map",
            "Receive resolution notifications",
            "Works offline as PWA",
        ]),
        "Incident Response (Authorities)",
        &lines(&[
            "Centralized incident dashboard",
            "Real-time incident feed (SSE)",
            "Status management workflow",
            "Resolution with evidence upload",
            "Timeline tracking & audit logs",
            "Statistics and analytics",
            "External API for integrations",
            "Webhook notifications",
        ]),
    )?;

    engine.workflow_slide(
        &mut deck,
        "How The Platform Works",
        &steps(&[
            ("Report", "Citizen captures photo of incident. AI analyzes and suggests category."),
            ("Verify", "Nearby users verify the report. Duplicates auto-merge as verifications."),
            ("Investigate", "Authorities receive alert, review incident, begin investigation."),
            ("Resolve", "Authority uploads evidence, adds notes, marks resolved."),
            ("Notify", "Reporter and verifiers notified. Timeline logged for transparency."),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "SnapAndSend - Core Features",
        &detailed(&[
            ("Smart Photo Capture", "Camera integration with AI-powered incident analysis and auto-categorization"),
            ("GPS Location Tracking", "Automatic location detection with manual override option for accurate placement"),
            ("Community Verification", "Nearby users can verify incidents (within 500m), boosting credibility"),
            ("Duplicate Detection", "Automatic merging of similar incidents within 200m as verifications"),
            ("Real-time Map View", "Interactive map showing all nearby incidents with status indicators"),
            ("Session Management", "30-minute timeout for security with activity tracking"),
            ("Progressive Web App", "Install on any device, works offline, push notifications"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Incident Response - Core Features",
        &detailed(&[
            ("Live Dashboard", "Real-time incident feed with Server-Sent Events (SSE) for instant updates"),
            ("Status Workflow", "Pending → Investigating → Resolved with timestamp logging"),
            ("Evidence Management", "Mandatory evidence upload and remediation notes before resolution"),
            ("Timeline Tracking", "Full audit trail: report time, investigation start, resolution time"),
            ("External API", "RESTful API with API key auth for third-party system integration"),
            ("Webhook Support", "Real-time notifications to external systems on incident events"),
            ("Statistics Dashboard", "Analytics on incident types, response times, resolution rates"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Supported Incident Categories",
        &detailed(&[
            ("Infrastructure", "Potholes, road damage, streetlight outages, drainage issues, damaged signage"),
            ("Environmental", "Illegal dumping, garbage overflow, flooding, pollution"),
            ("Public Safety", "Vandalism, robbery, assault, suspicious activity"),
            ("Traffic", "Traffic light malfunction, road blockages, accidents"),
            ("AI-Detected Categories", "System automatically detects and suggests new categories from image analysis"),
            ("Custom Categories", "Authorities can define region-specific incident types"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Technical Architecture",
        &detailed(&[
            ("Frontend", "React + TypeScript + Vite, TailwindCSS, Leaflet Maps, PWA-ready"),
            ("Backend", "Node.js + Express, Prisma ORM, SQLite (dev) / PostgreSQL (prod)"),
            ("AI Integration", "OpenAI Vision API (GPT-4o) for image analysis and categorization"),
            ("Real-time", "Server-Sent Events (SSE) for live updates, webhooks for integrations"),
            ("Security", "JWT authentication, API key validation, session timeout, HTTPS"),
            ("Storage", "Local file storage with S3-compatible cloud storage option"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Benefits to the Community",
        &detailed(&[
            ("Empowered Citizens", "Easy way to report issues and track resolution - voice is heard"),
            ("Faster Response", "Real-time alerts mean quicker authority response to critical incidents"),
            ("Transparency", "Full visibility into incident status, timeline, and resolution evidence"),
            ("Accountability", "Audit trails ensure authorities are held responsible for timely resolution"),
            ("Community Trust", "Verified reports from multiple citizens increase credibility"),
            ("Safer Neighborhoods", "Proactive incident reporting prevents escalation and improves safety"),
            ("Data-Driven Decisions", "Analytics help identify problem areas for targeted improvements"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Benefits to Authorities",
        &detailed(&[
            ("Centralized Management", "Single dashboard for all community-reported incidents"),
            ("Prioritized Response", "Verified incidents with multiple confirmations get priority"),
            ("Reduced False Reports", "Community verification and AI analysis filter out invalid reports"),
            ("Evidence Collection", "Photo evidence from multiple angles and locations"),
            ("Performance Metrics", "Track response times, resolution rates, and team performance"),
            ("Integration Ready", "API and webhooks connect with existing dispatch/CAD systems"),
            ("Public Relations", "Demonstrate responsiveness and transparency to citizens"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "External API & Integration",
        &detailed(&[
            ("RESTful API Endpoints", "GET /incidents, GET /incidents/:id, PATCH /incidents/:id/status, GET /stats"),
            ("API Key Authentication", "Secure access with X-API-Key header, partner management"),
            ("Webhook Events", "incident.created, incident.verified, incident.status_changed, incident.resolved"),
            ("Status Management", "External systems can update status: pending → investigating → resolved"),
            ("Location Filtering", "Query by lat/lng/radius for jurisdiction-based filtering"),
            ("Pagination Support", "Limit/offset parameters for handling large datasets"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Security & Privacy",
        &detailed(&[
            ("User Authentication", "Secure registration/login with password hashing (bcrypt)"),
            ("Session Management", "30-minute inactivity timeout with secure token handling"),
            ("API Security", "API key validation, rate limiting, partner access logging"),
            ("Data Privacy", "Optional anonymous reporting, minimal PII collection"),
            ("Audit Logging", "All status changes logged with timestamp and actor"),
            ("HTTPS Encryption", "All data transmitted over secure encrypted connections"),
        ]),
    )?;

    engine.workflow_slide(
        &mut deck,
        "Implementation Roadmap",
        &steps(&[
            ("Phase 1\nFoundation", "Core reporting, map view, basic auth, incident management"),
            ("Phase 2\nAI & Verification", "AI categorization, community verification, duplicate detection"),
            ("Phase 3\nAuthority Tools", "Dashboard, status workflow, evidence upload, timeline"),
            ("Phase 4\nIntegration", "External API, webhooks, third-party system connections"),
            ("Phase 5\nScale", "Analytics, multi-region, mobile apps, advanced reporting"),
        ]),
    )?;

    engine.content_slide(
        &mut deck,
        "Real-World Use Cases",
        &detailed(&[
            ("Municipal Services", "City councils receive and track infrastructure repair requests"),
            ("Police Departments", "Crime reporting with verified community witnesses"),
            ("Emergency Services", "Flood, fire, or accident reporting with real-time location"),
            ("Environmental Agencies", "Track illegal dumping and pollution incidents"),
            ("Neighborhood Watch", "Community-organized safety monitoring and reporting"),
            ("Utility Companies", "Report outages, damaged infrastructure, safety hazards"),
        ]),
    )?;

    engine.title_slide(
        &mut deck,
        "Ready to Transform\nCommunity Safety?",
        "Contact: Tech84 | Let's discuss implementation for your region",
    )?;

    Ok(deck)
}

/// Paragraph text as the writer stores it: vertical tabs become line
/// breaks and other control characters their `_xHHHH_` escape.
fn as_written(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{000B}' => out.push('\n'),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < ' ' => out.push_str(&format!("_x{:04X}_", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Compare the written file with the in-memory deck.
fn verify(deck: &Deck, summary: &PresentationSummary) -> Result<(), String> {
    if summary.slide_count() != deck.len() {
        return Err(format!(
            "expected {} slides, file has {}",
            deck.len(),
            summary.slide_count()
        ));
    }
    for (index, (slide, read)) in deck.slides().iter().zip(&summary.slides).enumerate() {
        let expected: Vec<String> = slide.paragraphs().map(|p| as_written(&p.text)).collect();
        let actual: Vec<String> = read.paragraphs().map(str::to_string).collect();
        if expected != actual {
            return Err(format!("slide {} text differs", index + 1));
        }
        if slide.shape_count() != read.shapes.len() {
            return Err(format!(
                "slide {} has {} shapes, file has {}",
                index + 1,
                slide.shape_count(),
                read.shapes.len()
            ));
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let (deck, writer) = match cli.script {
        Some(ref path) => {
            let script = DeckScript::from_path(path)?;
            (script.build()?, PptxWriter::with_theme(&script.theme()))
        },
        None => {
            let theme = proposal_theme();
            let engine = LayoutEngine::new(theme.clone())?;
            (proposal_deck(&engine)?, PptxWriter::with_theme(&theme))
        },
    };

    writer.save(&deck, &cli.output)?;
    println!("Presentation saved to: {}", cli.output.display());

    if cli.verify {
        let summary = PresentationSummary::from_path(&cli.output)?;
        verify(&deck, &summary)?;
        println!("Verified {} slides", summary.slide_count());
    }

    Ok(())
}
