use super::*;

#[test]
fn nav_title_marks_disabled_entries() {
    assert_eq!(nav_title("Posts", true), "Posts (coming soon)");
    assert_eq!(nav_title("Home", false), "Home");
}

#[test]
fn nav_items_link_every_live_route() {
    let live: Vec<&str> = NAV_ITEMS
        .iter()
        .filter(|def| !def.disabled)
        .map(|def| def.href)
        .collect();
    assert_eq!(live, ["/", "/signup"]);
}

#[test]
fn nav_items_disabled_entries_have_no_destination() {
    for def in NAV_ITEMS.iter().filter(|def| def.disabled) {
        assert_eq!(def.href, "#");
    }
}
