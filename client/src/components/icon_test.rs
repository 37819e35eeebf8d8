use super::*;

const ALL: [Icon; 5] = [Icon::BookOpen, Icon::GraduationCap, Icon::Home, Icon::User, Icon::Users];

#[test]
fn every_icon_has_drawable_body() {
    for icon in ALL {
        let body = icon.body();
        assert!(body.starts_with('<'), "{icon:?}");
        assert!(!body.contains("<svg"), "{icon:?} body must not nest an svg root");
    }
}

#[test]
fn icon_bodies_are_distinct() {
    for (i, a) in ALL.iter().enumerate() {
        for b in &ALL[i + 1..] {
            assert_ne!(a.body(), b.body(), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn glyph_renders_class_and_paths() {
    let html = view! { <IconGlyph icon=Icon::Home class="w-6 h-6"/> }.to_html();
    assert!(html.contains(r#"class="w-6 h-6""#));
    assert!(html.contains("0 0 24 24"));
    assert!(html.contains("polyline"));
}
