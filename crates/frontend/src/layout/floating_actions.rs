use crate::shared::icons::icon;
use contracts::navigation::QuickLink;
use leptos::prelude::*;

/// Fixed tabs on the right edge that expand on hover (see the injected stylesheet).
#[component]
pub fn FloatingActionButtons(links: &'static [QuickLink]) -> impl IntoView {
    view! {
        <nav class="floating-actions" aria-label="Atalhos">
            {links.iter().map(|link| {
                view! {
                    <div class="floating-action" style:top=format!("{}px", link.top_offset_px)>
                        <a
                            class="floating-action__link"
                            href=link.href
                            target=link.target()
                            rel=link.rel()
                            title=link.tooltip
                            aria-label=link.label
                        >
                            <span class="floating-action__icon">{icon(link.icon)}</span>
                            <span class="floating-action__label">{link.label}</span>
                        </a>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
