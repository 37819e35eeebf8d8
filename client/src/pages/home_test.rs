use super::*;

fn render() -> String {
    view! { <HomePage/> }.to_html()
}

fn role_section(html: &str) -> &str {
    let start = html.find(r#"id="roles""#).expect("role section present");
    let end = html.find(r#"id="features""#).expect("features section present");
    &html[start..end]
}

#[test]
fn renders_one_card_per_role() {
    let html = render();
    assert_eq!(html.matches("data-role=").count(), Role::ALL.len());
    assert_eq!(Role::ALL.len(), 3);
}

#[test]
fn cards_render_in_registry_order() {
    let html = render();
    let positions: Vec<usize> = Role::ALL
        .iter()
        .map(|role| html.find(&format!(r#"data-role="{}""#, role.key())).expect("card present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn each_card_links_to_its_route() {
    let html = render();
    let section = role_section(&html);
    for role in Role::ALL {
        let d = role.descriptor();
        assert!(section.contains(&format!(r#"href="{}""#, d.route)), "{role}");
        assert!(section.contains(&format!("{} Login", d.name)), "{role}");
        assert!(section.contains(d.description), "{role}");
    }
}

#[test]
fn header_admin_link_targets_admin_route() {
    let html = render();
    let header_end = html.find("</header>").expect("header present");
    assert!(html[..header_end].contains(r#"href="/admin""#));
    assert!(html[..header_end].contains("Admin Login"));
    assert!(!role_section(&html).contains(r#"href="/admin""#));
}

#[test]
fn role_section_uses_three_column_grid() {
    let html = render();
    assert!(role_section(&html).contains("grid grid-cols-1 md:grid-cols-3 gap-8"));
}

#[test]
fn features_grid_lists_fixed_entries() {
    let html = render();
    let features = &html[html.find(r#"id="features""#).expect("features section present")..];
    assert!(features.contains("Key Features of SchoolSync"));
    for feature in FEATURES {
        assert!(features.contains(feature.icon_color), "{}", feature.title);
        assert!(features.contains(feature.body), "{}", feature.title);
    }
    assert!(features.contains("Unified Access"));
    assert!(features.contains("Real-time Data"));
    assert!(features.contains("Secure &amp; Reliable"));
}

#[test]
fn footer_carries_copyright_notice() {
    let html = render();
    assert!(html.contains("\u{a9} 2024 SchoolSync. All rights reserved. | Contact Support"));
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render(), render());
}
