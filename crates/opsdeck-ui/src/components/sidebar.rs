use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::Icon;
use crate::app::Section;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub active:    Section,
  pub collapsed: bool,
  pub on_nav:    Callback<Section>,
  pub on_toggle_collapse:
    Callback<()>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let toggle_label =
    if props.collapsed {
      "\u{203A}"
    } else {
      "\u{2039}"
    };
  let on_toggle = {
    let on_toggle_collapse =
      props.on_toggle_collapse.clone();
    Callback::from(move |_| {
      on_toggle_collapse.emit(());
    })
  };

  html! {
      <div class={classes!("sidebar", props.collapsed.then_some("collapsed"))}>
          <div class="sidebar-brand">
              {
                  if props.collapsed {
                      html! {}
                  } else {
                      html! { <span class="brand-name">{ "Opsdeck" }</span> }
                  }
              }
              <button class="btn ghost" onclick={on_toggle}>{ toggle_label }</button>
          </div>
          <nav class="sidebar-nav">
              {
                  for Section::all().into_iter().map(|section| {
                      let active = props.active == section;
                      let on_nav = props.on_nav.clone();
                      html! {
                          <button
                              class={classes!("nav-item", active.then_some("active"))}
                              onclick={Callback::from(move |_| on_nav.emit(section))}
                          >
                              <Icon icon={section.icon()} />
                              {
                                  if props.collapsed {
                                      html! {}
                                  } else {
                                      html! { <span class="nav-label">{ section.label() }</span> }
                                  }
                              }
                          </button>
                      }
                  })
              }
          </nav>
      </div>
  }
}
