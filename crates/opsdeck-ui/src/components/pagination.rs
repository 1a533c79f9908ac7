use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
  pub page:        usize,
  pub total_pages: usize,
  pub total_rows:  usize,
  pub first_row:   usize,
  pub last_row:    usize,
  pub on_page:     Callback<usize>
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  let last =
    props.total_pages.max(1);
  let summary =
    if props.total_rows == 0 {
      "No rows".to_string()
    } else {
      format!(
        "Showing {}-{} of {}",
        props.first_row,
        props.last_row,
        props.total_rows
      )
    };

  let prev = {
    let on_page =
      props.on_page.clone();
    let page = props.page;
    Callback::from(move |_| {
      on_page
        .emit(page.saturating_sub(1));
    })
  };
  let next = {
    let on_page =
      props.on_page.clone();
    let page = props.page;
    Callback::from(move |_| {
      on_page.emit(page + 1);
    })
  };

  html! {
      <div class="pagination">
          <span class="pagination-summary">{ summary }</span>
          <div class="pagination-pages">
              <button
                  class="btn ghost"
                  disabled={props.page <= 1}
                  onclick={prev}
              >
                  { "\u{2039}" }
              </button>
              {
                  for (1..=last).map(|page| {
                      let on_page = props.on_page.clone();
                      let current = page == props.page;
                      html! {
                          <button
                              class={classes!("btn", "ghost", current.then_some("current"))}
                              onclick={Callback::from(move |_| on_page.emit(page))}
                          >
                              { page }
                          </button>
                      }
                  })
              }
              <button
                  class="btn ghost"
                  disabled={props.page >= last}
                  onclick={next}
              >
                  { "\u{203A}" }
              </button>
          </div>
      </div>
  }
}
