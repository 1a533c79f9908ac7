use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::app::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub theme: ThemeMode,
  pub on_toggle_theme: Callback<()>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let on_toggle = {
    let on_toggle_theme =
      props.on_toggle_theme.clone();
    Callback::from(move |_| {
      on_toggle_theme.emit(());
    })
  };

  html! {
      <header class="header">
          <input
              class="header-search"
              type="text"
              placeholder="Search anything..."
          />
          <div class="header-actions">
              <button class="btn" onclick={on_toggle}>
                  { props.theme.toggle_label() }
              </button>
              <div class="header-profile">
                  <span class="header-name">{ "Sarah Johnson" }</span>
                  <span class="header-role">{ "Admin" }</span>
              </div>
          </div>
      </header>
  }
}
