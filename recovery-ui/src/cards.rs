use leptos::*;
use recovery_core::style::{severity_class, status_class};
use recovery_core::{Backup, Choice, Entity, Incident, Plan, Process, Resource, Severity, Site};

/// A record type the generic record manager knows how to draw.
pub trait CardView: Entity {
    fn card(&self) -> View;
}

fn value(text: impl Into<String>) -> View {
    view! { <span class="value">{text.into()}</span> }.into_view()
}

fn severity_badge(level: Severity) -> View {
    view! { <span class=severity_class(level)>{level.label()}</span> }.into_view()
}

fn status_pill<C: Choice>(status: C) -> View {
    view! { <span class=status_class(status)>{status.label()}</span> }.into_view()
}

/// Shared card layout: icon, headline, subtitle, optional corner pill and
/// label/value rows.
fn card_shell<E: Entity>(
    icon: &'static str,
    record: &E,
    subtitle: String,
    corner: Option<View>,
    rows: Vec<(&'static str, View)>,
) -> View {
    view! {
        <article class="card">
            <header class="card-header">
                <span class="icon">{icon}</span>
                <div class="card-heading">
                    <h3>{record.title().to_string()}</h3>
                    <p class="muted">{subtitle}</p>
                </div>
                {corner}
            </header>
            <dl class="card-rows">
                {rows
                    .into_iter()
                    .map(|(label, content)| view! {
                        <div class="row">
                            <dt>{label}</dt>
                            <dd>{content}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </article>
    }
    .into_view()
}

fn id_line<E: Entity>(record: &E) -> String {
    format!("{} ID: {}", E::KIND.singular(), record.id())
}

impl CardView for Resource {
    fn card(&self) -> View {
        card_shell(
            "🗄",
            self,
            self.kind.label().to_string(),
            Some(status_pill(self.status)),
            vec![
                ("Resource ID:", value(self.id.clone())),
                ("Type:", value(self.kind.label())),
            ],
        )
    }
}

impl CardView for Process {
    fn card(&self) -> View {
        card_shell(
            "📄",
            self,
            id_line(self),
            None,
            vec![
                ("Priority Level:", severity_badge(self.priority)),
                ("Recovery Time:", value(self.rto.clone())),
            ],
        )
    }
}

impl CardView for Site {
    fn card(&self) -> View {
        card_shell(
            "📍",
            self,
            id_line(self),
            None,
            vec![
                ("Location:", value(self.location.clone())),
                ("Capacity:", value(self.capacity.clone())),
            ],
        )
    }
}

impl CardView for Backup {
    fn card(&self) -> View {
        card_shell(
            "💾",
            self,
            id_line(self),
            None,
            vec![
                ("Location:", value(self.location.clone())),
                ("Last Run:", value(self.last_run.clone())),
                ("Size:", value(self.size.clone())),
            ],
        )
    }
}

impl CardView for Plan {
    fn card(&self) -> View {
        card_shell(
            "🛡",
            self,
            id_line(self),
            None,
            vec![
                ("Processes:", value(self.processes.to_string())),
                ("Sites:", value(self.sites.to_string())),
                ("Status:", status_pill(self.status)),
            ],
        )
    }
}

impl CardView for Incident {
    fn card(&self) -> View {
        card_shell(
            "⚠",
            self,
            id_line(self),
            Some(status_pill(self.status)),
            vec![
                ("Date:", value(self.date.clone())),
                ("Impact Level:", severity_badge(self.impact)),
            ],
        )
    }
}
