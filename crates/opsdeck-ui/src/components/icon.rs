use opsdeck_core::icon::IconId;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct IconProps {
  pub icon: IconId
}

/// One inline SVG glyph per
/// `IconId` variant; the closed enum
/// means there is no lookup that can
/// miss at render time.
#[function_component(Icon)]
pub fn icon(
  props: &IconProps
) -> Html {
  let body = match props.icon {
    | IconId::Dashboard => html! {
        <>
            <rect x="3" y="3" width="7" height="7" rx="1" />
            <rect x="14" y="3" width="7" height="7" rx="1" />
            <rect x="3" y="14" width="7" height="7" rx="1" />
            <rect x="14" y="14" width="7" height="7" rx="1" />
        </>
    },
    | IconId::Users => html! {
        <>
            <circle cx="9" cy="7" r="4" />
            <path d="M3 21v-2a6 6 0 0 1 12 0v2" />
            <path d="M16 3.5a4 4 0 0 1 0 7" />
        </>
    },
    | IconId::Calendar => html! {
        <>
            <rect x="3" y="4" width="18" height="17" rx="2" />
            <path d="M8 2v4" />
            <path d="M16 2v4" />
            <path d="M3 10h18" />
        </>
    },
    | IconId::Board => html! {
        <>
            <rect x="3" y="3" width="5" height="18" rx="1" />
            <rect x="10" y="3" width="5" height="12" rx="1" />
            <rect x="17" y="3" width="4" height="8" rx="1" />
        </>
    },
    | IconId::Chart => html! {
        <>
            <path d="M4 20V10" />
            <path d="M10 20V4" />
            <path d="M16 20v-8" />
            <path d="M22 20H2" />
        </>
    },
    | IconId::Settings => html! {
        <>
            <circle cx="12" cy="12" r="3" />
            <path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9l2.2 2.2M16.9 16.9l2.2 2.2M19.1 4.9l-2.2 2.2M7.1 16.9l-2.2 2.2" />
        </>
    },
    | IconId::Revenue => html! {
        <>
            <path d="M12 2v20" />
            <path d="M17 6H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H7" />
        </>
    },
    | IconId::Trend => html! {
        <>
            <path d="M3 17l6-6 4 4 8-8" />
            <path d="M15 7h6v6" />
        </>
    },
    | IconId::Views => html! {
        <>
            <path d="M2 12s4-7 10-7 10 7 10 7-4 7-10 7-10-7-10-7z" />
            <circle cx="12" cy="12" r="3" />
        </>
    },
    | IconId::Activity => html! {
        <path d="M22 12h-4l-3 9L9 3l-3 9H2" />
    }
  };

  html! {
      <svg
          class="icon"
          viewBox="0 0 24 24"
          fill="none"
          stroke="currentColor"
          stroke-width="2"
          stroke-linecap="round"
          stroke-linejoin="round"
      >
          { body }
      </svg>
  }
}
