//! Built-in stylesheet, injected into the shadow root ahead of any
//! caller-supplied `css` attribute text.
//!
//! The `.choices.hidden` / `.choices.shown` pair is the visual half of the
//! two-phase open animation: the list mounts with `hidden`, and the state
//! machine swaps in `shown` one tick later so the transition actually runs.

pub const SHARER_CSS: &str = r#"
:host {
    display: inline-block;
}
.sharer {
    display: inline-flex;
    align-items: center;
    font-family: inherit;
}
.sharer a {
    color: inherit;
    text-decoration: none;
    cursor: pointer;
}
.opener {
    display: inline-flex;
    align-items: center;
    gap: 0.35em;
}
.opener svg {
    width: 1.5em;
    height: 1.5em;
    fill: currentColor;
}
.opener .title {
    font-weight: 600;
}
.share-buttons {
    display: inline-block;
}
.choices {
    display: inline-flex;
    align-items: center;
    gap: 0.5em;
    margin: 0 0 0 0.75em;
    padding: 0;
    list-style: none;
    transition: opacity 0.2s ease, transform 0.2s ease;
}
.choices.hidden {
    opacity: 0;
    transform: translateX(-0.5em);
}
.choices.shown {
    opacity: 1;
    transform: translateX(0);
}
.choices li {
    display: inline-flex;
}
.choices svg {
    width: 1.75em;
    height: 1.75em;
    fill: currentColor;
}
.choices a {
    position: relative;
    display: inline-flex;
}
.copy-announcer {
    position: absolute;
    bottom: 100%;
    left: 50%;
    transform: translateX(-50%);
}
.copy-tip {
    background: #222;
    color: #fff;
    font-size: 0.75em;
    line-height: 1;
    padding: 0.5em 0.75em;
    border-radius: 3px;
    white-space: nowrap;
    margin-bottom: 0.5em;
}
"#;
