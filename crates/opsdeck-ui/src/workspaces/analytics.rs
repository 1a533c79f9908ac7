use opsdeck_core::seed;
use opsdeck_core::series::{
  PerfRow,
  PerfTable,
  Series,
  SeriesPoint,
  parse_value
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::{
  BarChart,
  MultiLineChart,
  PieChart,
  input_value
};

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum EditorPane {
  Performance,
  Category,
  Conversion
}

#[derive(Clone, Default, PartialEq)]
struct PerfDraft {
  label:   String,
  sales:   String,
  users:   String,
  revenue: String
}

#[derive(Clone, Default, PartialEq)]
struct PointDraft {
  label: String,
  value: String,
  color: String
}

#[function_component(AnalyticsWorkspace)]
pub fn analytics_workspace() -> Html {
  let performance = use_state(
    seed::seed_performance
  );
  let categories =
    use_state(seed::seed_categories);
  let conversion =
    use_state(seed::seed_conversion);

  let pane =
    use_state(|| None::<EditorPane>);
  let editing_id =
    use_state(|| None::<u32>);
  let perf_draft =
    use_state(PerfDraft::default);
  let category_draft =
    use_state(PointDraft::default);
  let conversion_draft =
    use_state(PointDraft::default);

  let toggle_pane = {
    let pane = pane.clone();
    let editing_id =
      editing_id.clone();
    Callback::from(
      move |next: EditorPane| {
        if *pane == Some(next) {
          pane.set(None);
        } else {
          pane.set(Some(next));
        }
        editing_id.set(None);
      }
    )
  };

  let total_sales =
    performance.total_sales();
  let total_users =
    performance.total_users();
  let avg_order =
    performance.avg_order_value();
  let conversion_rate =
    funnel_rate(&conversion);

  let perf_editor = if *pane
    == Some(EditorPane::Performance)
  {
    render_perf_editor(
      performance.clone(),
      editing_id.clone(),
      perf_draft.clone()
    )
  } else {
    html! {}
  };

  let category_editor = if *pane
    == Some(EditorPane::Category)
  {
    render_point_editor(
      categories.clone(),
      editing_id.clone(),
      category_draft.clone(),
      "Category Name"
    )
  } else {
    html! {}
  };

  let conversion_editor = if *pane
    == Some(EditorPane::Conversion)
  {
    render_point_editor(
      conversion.clone(),
      editing_id.clone(),
      conversion_draft.clone(),
      "Stage Name"
    )
  } else {
    html! {}
  };

  let open_perf = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane.emit(
        EditorPane::Performance
      );
    })
  };
  let open_category = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane
        .emit(EditorPane::Category);
    })
  };
  let open_conversion = {
    Callback::from(move |_| {
      toggle_pane.emit(
        EditorPane::Conversion
      );
    })
  };

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Analytics" }</h1>
                  <p class="muted">{ "Track performance across sales, traffic, and conversion." }</p>
              </div>
          </div>
          <div class="summary-grid">
              <div class="stat-card">
                  <div class="stat-value">{ format!("${total_sales:.0}") }</div>
                  <div class="muted">{ "Total Sales" }</div>
              </div>
              <div class="stat-card">
                  <div class="stat-value">{ format!("{total_users:.0}") }</div>
                  <div class="muted">{ "Active Users" }</div>
              </div>
              <div class="stat-card">
                  <div class="stat-value">{ format!("{conversion_rate:.1}%") }</div>
                  <div class="muted">{ "Conversion Rate" }</div>
              </div>
              <div class="stat-card">
                  <div class="stat-value">{ format!("${avg_order:.2}") }</div>
                  <div class="muted">{ "Avg. Order Value" }</div>
              </div>
          </div>
          <div class="panel wide">
              <div class="panel-head">
                  <span class="panel-title">{ "Performance Overview" }</span>
                  <button class="btn primary" onclick={open_perf}>{ "+" }</button>
              </div>
              { perf_editor }
              <MultiLineChart rows={performance.rows().to_vec()} />
          </div>
          <div class="dashboard-grid">
              <div class="panel wide">
                  <div class="panel-head">
                      <span class="panel-title">{ "Sales by Category" }</span>
                      <button class="btn primary" onclick={open_category}>{ "+" }</button>
                  </div>
                  { category_editor }
                  <PieChart points={categories.points().to_vec()} />
              </div>
              <div class="panel wide">
                  <div class="panel-head">
                      <span class="panel-title">{ "Conversion Funnel" }</span>
                      <button class="btn primary" onclick={open_conversion}>{ "+" }</button>
                  </div>
                  { conversion_editor }
                  <BarChart points={conversion.points().to_vec()} />
              </div>
          </div>
      </div>
  }
}

/// Share of the funnel's first stage
/// that reaches the last one.
fn funnel_rate(
  conversion: &Series
) -> f64 {
  let points = conversion.points();
  match (
    points.first(),
    points.last()
  ) {
    | (Some(first), Some(last))
      if first.value > 0.0 =>
    {
      last.value / first.value * 100.0
    }
    | _ => 0.0
  }
}

fn render_perf_editor(
  performance: UseStateHandle<
    PerfTable
  >,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<PerfDraft>
) -> Html {
  let field = |setter: fn(
    PerfDraft,
    String
  )
    -> PerfDraft| {
    let draft = draft.clone();
    Callback::from(move |event| {
      draft.set(setter(
        (*draft).clone(),
        input_value(&event)
      ));
    })
  };

  let on_label =
    field(|mut draft, value| {
      draft.label = value;
      draft
    });
  let on_sales =
    field(|mut draft, value| {
      draft.sales = value;
      draft
    });
  let on_users =
    field(|mut draft, value| {
      draft.users = value;
      draft
    });
  let on_revenue =
    field(|mut draft, value| {
      draft.revenue = value;
      draft
    });

  let submit = {
    let performance =
      performance.clone();
    let editing_id =
      editing_id.clone();
    let draft = draft.clone();
    Callback::from(move |_| {
      let label =
        draft.label.trim().to_string();
      if label.is_empty() {
        return;
      }
      let sales =
        parse_value(&draft.sales);
      let users =
        parse_value(&draft.users);
      let revenue =
        parse_value(&draft.revenue);

      let mut next =
        (*performance).clone();
      match *editing_id {
        | Some(id) => {
          next.update(PerfRow {
            id,
            label,
            sales,
            users,
            revenue
          });
        }
        | None => {
          next.add(
            label, sales, users,
            revenue
          );
        }
      }
      performance.set(next);
      editing_id.set(None);
      draft.set(PerfDraft::default());
    })
  };

  let cancel = {
    let editing_id =
      editing_id.clone();
    let draft = draft.clone();
    Callback::from(move |_| {
      editing_id.set(None);
      draft.set(PerfDraft::default());
    })
  };

  let rows: Vec<Html> = performance
    .rows()
    .iter()
    .cloned()
    .map(|row| {
      let edit = {
        let editing_id =
          editing_id.clone();
        let draft = draft.clone();
        let row = row.clone();
        Callback::from(move |_| {
          editing_id.set(Some(row.id));
          draft.set(PerfDraft {
            label: row.label.clone(),
            sales: format!(
              "{}",
              row.sales
            ),
            users: format!(
              "{}",
              row.users
            ),
            revenue: format!(
              "{}",
              row.revenue
            )
          });
        })
      };
      let remove = {
        let performance =
          performance.clone();
        let id = row.id;
        Callback::from(move |_| {
          let mut next =
            (*performance).clone();
          next.remove(id);
          performance.set(next);
        })
      };
      html! {
          <div class="point-row">
              <span>
                  { format!(
                      "{}: sales {} / users {} / revenue {}",
                      row.label, row.sales, row.users, row.revenue
                  ) }
              </span>
              <span class="row-actions">
                  <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                  <button class="btn ghost danger" onclick={remove}>{ "Delete" }</button>
              </span>
          </div>
      }
    })
    .collect();

  html! {
      <div class="inline-editor">
          <div class="inline-editor-title">
              { if editing_id.is_some() { "Edit Data Point" } else { "Add New Data" } }
          </div>
          <input
              type="text"
              placeholder="Month"
              value={draft.label.clone()}
              oninput={on_label}
          />
          <input
              type="number"
              placeholder="Sales"
              value={draft.sales.clone()}
              oninput={on_sales}
          />
          <input
              type="number"
              placeholder="Users"
              value={draft.users.clone()}
              oninput={on_users}
          />
          <input
              type="number"
              placeholder="Revenue"
              value={draft.revenue.clone()}
              oninput={on_revenue}
          />
          <div class="form-row">
              {
                  if editing_id.is_some() {
                      html! {
                          <>
                              <button class="btn primary" onclick={submit}>{ "Update" }</button>
                              <button class="btn" onclick={cancel}>{ "Cancel" }</button>
                          </>
                      }
                  } else {
                      html! {
                          <button class="btn primary" onclick={submit}>{ "Add Data" }</button>
                      }
                  }
              }
          </div>
          <div class="point-rows">
              { for rows.into_iter() }
          </div>
      </div>
  }
}

fn render_point_editor(
  series: UseStateHandle<Series>,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<PointDraft>,
  label_placeholder: &'static str
) -> Html {
  let on_label = {
    let draft = draft.clone();
    Callback::from(move |event| {
      draft.set(PointDraft {
        label: input_value(&event),
        ..(*draft).clone()
      });
    })
  };
  let on_value = {
    let draft = draft.clone();
    Callback::from(move |event| {
      draft.set(PointDraft {
        value: input_value(&event),
        ..(*draft).clone()
      });
    })
  };
  let on_color = {
    let draft = draft.clone();
    Callback::from(move |event| {
      draft.set(PointDraft {
        color: input_value(&event),
        ..(*draft).clone()
      });
    })
  };

  let submit = {
    let series = series.clone();
    let editing_id =
      editing_id.clone();
    let draft = draft.clone();
    Callback::from(move |_| {
      let label =
        draft.label.trim().to_string();
      let value =
        parse_value(&draft.value);
      if label.is_empty()
        || value <= 0.0
      {
        return;
      }
      let color =
        if draft.color.is_empty() {
          None
        } else {
          Some(draft.color.clone())
        };

      let mut next =
        (*series).clone();
      match *editing_id {
        | Some(id) => {
          next.update(SeriesPoint {
            id,
            label,
            value,
            color
          });
        }
        | None => {
          next.add(
            label, value, color
          );
        }
      }
      series.set(next);
      editing_id.set(None);
      draft.set(PointDraft::default());
    })
  };

  let cancel = {
    let editing_id =
      editing_id.clone();
    let draft = draft.clone();
    Callback::from(move |_| {
      editing_id.set(None);
      draft.set(PointDraft::default());
    })
  };

  let rows: Vec<Html> = series
    .points()
    .iter()
    .cloned()
    .map(|point| {
      let edit = {
        let editing_id =
          editing_id.clone();
        let draft = draft.clone();
        let point = point.clone();
        Callback::from(move |_| {
          editing_id
            .set(Some(point.id));
          draft.set(PointDraft {
            label: point
              .label
              .clone(),
            value: format!(
              "{}",
              point.value
            ),
            color: point
              .color
              .clone()
              .unwrap_or_default()
          });
        })
      };
      let remove = {
        let series = series.clone();
        let id = point.id;
        Callback::from(move |_| {
          let mut next =
            (*series).clone();
          next.remove(id);
          series.set(next);
        })
      };
      html! {
          <div class="point-row">
              <span>{ format!("{}: {}", point.label, point.value) }</span>
              <span class="row-actions">
                  <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                  <button class="btn ghost danger" onclick={remove}>{ "Delete" }</button>
              </span>
          </div>
      }
    })
    .collect();

  html! {
      <div class="inline-editor">
          <div class="inline-editor-title">
              { if editing_id.is_some() { "Edit Entry" } else { "Add New Entry" } }
          </div>
          <input
              type="text"
              placeholder={label_placeholder}
              value={draft.label.clone()}
              oninput={on_label}
          />
          <input
              type="number"
              placeholder="Value"
              value={draft.value.clone()}
              oninput={on_value}
          />
          <input
              type="color"
              value={draft.color.clone()}
              oninput={on_color}
          />
          <div class="form-row">
              {
                  if editing_id.is_some() {
                      html! {
                          <>
                              <button class="btn primary" onclick={submit}>{ "Update" }</button>
                              <button class="btn" onclick={cancel}>{ "Cancel" }</button>
                          </>
                      }
                  } else {
                      html! {
                          <button class="btn primary" onclick={submit}>{ "Add Entry" }</button>
                      }
                  }
              }
          </div>
          <div class="point-rows">
              { for rows.into_iter() }
          </div>
      </div>
  }
}
