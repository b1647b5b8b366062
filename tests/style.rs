use plot_style::{RcValue, StyleError, rc, set_style};

// one test so nothing else in this binary touches the global table concurrently
#[test]
fn global_table_lifecycle() {
    rc::reset();
    assert!(rc::snapshot().is_empty());

    let params = set_style(3, false).unwrap();
    assert_eq!(params.prop_cycle.len(), 3);

    let Some(RcValue::Cycle(cycle)) = rc::get("axes.prop_cycle") else {
        panic!("prop cycle missing");
    };
    assert_eq!(cycle.len(), 3);
    assert!(cycle.entries().iter().all(|e| e.line_style.symbol() == "-"));
    assert_eq!(rc::get("legend.fontsize"), Some(RcValue::Float(12.0)));
    assert_eq!(rc::get("xtick.direction"), Some(RcValue::Text("in".into())));

    // a rejected call leaves the table alone
    assert!(matches!(
        set_style(0, true),
        Err(StyleError::ClassCount { got: 0, .. })
    ));
    assert_eq!(rc::snapshot().len(), 23);

    // reapplying replaces the cycle in place
    let before = rc::snapshot();
    set_style(10, true).unwrap();
    let after = rc::snapshot();
    assert_eq!(before.len(), after.len());
    let Some(RcValue::Cycle(cycle)) = after.get("axes.prop_cycle") else {
        panic!("prop cycle missing");
    };
    assert_eq!(cycle.len(), 10);
    assert_eq!(cycle.entries()[4].line_style.symbol(), ":");

    let sheet = after.to_mplstyle();
    assert_eq!(sheet.lines().count(), 23);
    assert!(sheet.contains("ytick.minor.width: 2\n"));

    rc::reset();
    assert_eq!(rc::get("axes.grid"), None);
}
