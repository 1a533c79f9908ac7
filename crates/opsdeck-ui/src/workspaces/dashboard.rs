use opsdeck_core::icon::IconId;
use opsdeck_core::record::Activity;
use opsdeck_core::seed;
use opsdeck_core::series::{
  MetricCard,
  MetricDeck,
  Series,
  SeriesPoint,
  Trend,
  parse_value
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};

use crate::components::{
  AreaChart,
  Icon,
  PieChart,
  input_value,
  select_value
};

const ON_TRACK_THRESHOLD: f64 =
  20_000.0;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum EditorPane {
  Metric,
  Revenue,
  Traffic,
  Activity
}

#[derive(Clone, PartialEq)]
struct MetricDraft {
  title:  String,
  value:  String,
  change: String,
  trend:  String,
  icon:   String
}

impl Default for MetricDraft {
  fn default() -> Self {
    Self {
      title:  String::new(),
      value:  String::new(),
      change: String::new(),
      trend:  "up".to_string(),
      icon:   "revenue".to_string()
    }
  }
}

#[derive(Clone, Default, PartialEq)]
struct PointDraft {
  label: String,
  value: String,
  color: String
}

#[derive(Clone, Default, PartialEq)]
struct ActivityDraft {
  user:   String,
  action: String
}

#[function_component(DashboardWorkspace)]
pub fn dashboard_workspace() -> Html {
  let metrics = use_state(|| {
    MetricDeck::new(
      seed::seed_metrics()
    )
  });
  let revenue =
    use_state(seed::seed_revenue);
  let traffic =
    use_state(seed::seed_traffic);
  let activities =
    use_state(seed::seed_activities);

  let pane =
    use_state(|| None::<EditorPane>);
  let editing_id =
    use_state(|| None::<u32>);
  let metric_draft =
    use_state(MetricDraft::default);
  let revenue_draft =
    use_state(PointDraft::default);
  let traffic_draft =
    use_state(PointDraft::default);
  let activity_draft =
    use_state(ActivityDraft::default);

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

  let metrics_panel = render_metrics(
    metrics.clone(),
    pane.clone(),
    editing_id.clone(),
    metric_draft.clone(),
    toggle_pane.clone()
  );

  let revenue_panel = render_revenue(
    revenue.clone(),
    pane.clone(),
    editing_id.clone(),
    revenue_draft.clone(),
    toggle_pane.clone()
  );

  let traffic_panel = render_traffic(
    traffic.clone(),
    pane.clone(),
    editing_id.clone(),
    traffic_draft.clone(),
    toggle_pane.clone()
  );

  let activity_panel =
    render_activities(
      activities.clone(),
      pane.clone(),
      activity_draft.clone(),
      toggle_pane
    );

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Dashboard" }</h1>
                  <p class="muted">{ "Welcome back, here's what's happening with your business today." }</p>
              </div>
          </div>
          <div class="dashboard-grid">
              { metrics_panel }
              { revenue_panel }
              { traffic_panel }
          </div>
          { activity_panel }
      </div>
  }
}

fn render_metrics(
  metrics: UseStateHandle<MetricDeck>,
  pane: UseStateHandle<
    Option<EditorPane>
  >,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<MetricDraft>,
  toggle_pane: Callback<EditorPane>
) -> Html {
  let open = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane
        .emit(EditorPane::Metric);
    })
  };

  let editor = if *pane
    == Some(EditorPane::Metric)
  {
    let on_title = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(MetricDraft {
          title: input_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let on_value = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(MetricDraft {
          value: input_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let on_change = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(MetricDraft {
          change: input_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let on_trend = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(MetricDraft {
          trend: select_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let on_icon = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(MetricDraft {
          icon: select_value(&event),
          ..(*draft).clone()
        });
      })
    };

    let submit = {
      let metrics = metrics.clone();
      let editing_id =
        editing_id.clone();
      let draft = draft.clone();
      Callback::from(move |_| {
        if draft.title.trim().is_empty()
          || draft
            .value
            .trim()
            .is_empty()
        {
          return;
        }
        let trend = Trend::from_key(
          &draft.trend
        )
        .unwrap_or(Trend::Up);
        let icon = IconId::from_key(
          &draft.icon
        )
        .unwrap_or(IconId::Revenue);

        let mut next =
          (*metrics).clone();
        let id = match *editing_id {
          | Some(id) => id,
          | None => next.next_id()
        };
        let card = MetricCard {
          id,
          title: draft
            .title
            .trim()
            .to_string(),
          value: draft
            .value
            .trim()
            .to_string(),
          change: draft
            .change
            .trim()
            .to_string(),
          trend,
          icon
        };
        if editing_id.is_some() {
          next.update(card);
        } else {
          next.add(card);
        }
        metrics.set(next);
        editing_id.set(None);
        draft
          .set(MetricDraft::default());
      })
    };

    let cancel = {
      let editing_id =
        editing_id.clone();
      let draft = draft.clone();
      Callback::from(move |_| {
        editing_id.set(None);
        draft
          .set(MetricDraft::default());
      })
    };

    html! {
        <div class="inline-editor">
            <div class="inline-editor-title">
                { if editing_id.is_some() { "Edit Metric" } else { "Add New Metric" } }
            </div>
            <input
                type="text"
                placeholder="Title"
                value={draft.title.clone()}
                oninput={on_title}
            />
            <input
                type="text"
                placeholder="Value"
                value={draft.value.clone()}
                oninput={on_value}
            />
            <input
                type="text"
                placeholder="Change"
                value={draft.change.clone()}
                oninput={on_change}
            />
            <select onchange={on_trend}>
                <option value="up" selected={draft.trend == "up"}>{ "Up" }</option>
                <option value="down" selected={draft.trend == "down"}>{ "Down" }</option>
            </select>
            <select onchange={on_icon}>
                {
                    for IconId::metric_choices().into_iter().map(|icon| html! {
                        <option
                            value={icon.as_key()}
                            selected={draft.icon == icon.as_key()}
                        >
                            { icon.label() }
                        </option>
                    })
                }
            </select>
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
                            <button class="btn primary" onclick={submit}>{ "Add Metric" }</button>
                        }
                    }
                }
            </div>
        </div>
    }
  } else {
    html! {}
  };

  let cards: Vec<Html> = metrics
    .cards()
    .iter()
    .cloned()
    .map(|card| {
      let edit = {
        let pane = pane.clone();
        let editing_id =
          editing_id.clone();
        let draft = draft.clone();
        let card = card.clone();
        Callback::from(move |_| {
          pane.set(Some(
            EditorPane::Metric
          ));
          editing_id
            .set(Some(card.id));
          draft.set(MetricDraft {
            title: card.title.clone(),
            value: card.value.clone(),
            change: card
              .change
              .clone(),
            trend: card
              .trend
              .as_key()
              .to_string(),
            icon: card
              .icon
              .as_key()
              .to_string()
          });
        })
      };
      let remove = {
        let metrics = metrics.clone();
        let id = card.id;
        Callback::from(move |_| {
          let mut next =
            (*metrics).clone();
          next.remove(id);
          metrics.set(next);
        })
      };
      let trend_class =
        match card.trend {
          | Trend::Up => "trend up",
          | Trend::Down => {
            "trend down"
          }
        };
      html! {
          <div class="stat-card">
              <div class="stat-card-top">
                  <span class="stat-icon"><Icon icon={card.icon} /></span>
                  <span class={trend_class}>{ &card.change }</span>
              </div>
              <div class="stat-value">{ &card.value }</div>
              <div class="muted">{ &card.title }</div>
              <div class="row-actions">
                  <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                  <button class="btn ghost danger" onclick={remove}>{ "Delete" }</button>
              </div>
          </div>
      }
    })
    .collect();

  html! {
      <div class="panel">
          <div class="panel-head">
              <span class="panel-title">{ "Key Metrics" }</span>
              <button class="btn primary" onclick={open}>{ "+" }</button>
          </div>
          { editor }
          {
              if cards.is_empty() {
                  html! { <p class="empty-state">{ "No metrics yet" }</p> }
              } else {
                  html! { <div class="stat-list">{ for cards.into_iter() }</div> }
              }
          }
      </div>
  }
}

fn render_point_rows(
  series: &Series,
  suffix: &'static str,
  on_edit: Callback<SeriesPoint>,
  on_delete: Callback<u32>
) -> Html {
  if series.is_empty() {
    return html! {};
  }

  html! {
      <div class="point-rows">
          {
              for series.points().iter().cloned().map(|point| {
                  let edit = {
                      let on_edit = on_edit.clone();
                      let point = point.clone();
                      Callback::from(move |_| {
                          on_edit.emit(point.clone());
                      })
                  };
                  let remove = {
                      let on_delete = on_delete.clone();
                      let id = point.id;
                      Callback::from(move |_| {
                          on_delete.emit(id);
                      })
                  };
                  html! {
                      <div class="point-row">
                          <span>{ format!("{}: {}{suffix}", point.label, point.value) }</span>
                          <span class="row-actions">
                              <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                              <button class="btn ghost danger" onclick={remove}>{ "Delete" }</button>
                          </span>
                      </div>
                  }
              })
          }
      </div>
  }
}

fn render_revenue(
  revenue: UseStateHandle<Series>,
  pane: UseStateHandle<
    Option<EditorPane>
  >,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<PointDraft>,
  toggle_pane: Callback<EditorPane>
) -> Html {
  let open = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane
        .emit(EditorPane::Revenue);
    })
  };

  let total = revenue.total();
  let on_track =
    total > ON_TRACK_THRESHOLD;

  let editor = if *pane
    == Some(EditorPane::Revenue)
  {
    render_point_editor(
      revenue.clone(),
      editing_id.clone(),
      draft.clone(),
      "Month",
      false
    )
  } else {
    html! {}
  };

  html! {
      <div class="panel wide">
          <div class="panel-head">
              <span class="panel-title">{ "Revenue Overview" }</span>
              <button class="btn primary" onclick={open}>{ "+" }</button>
          </div>
          { editor }
          <AreaChart points={revenue.points().to_vec()} />
          <div class={classes!("summary-bar", on_track.then_some("ok"))}>
              <span>{ format!("Total Revenue: ${total:.0}") }</span>
              <span>
                  { if on_track { "On track" } else { "Needs improvement" } }
              </span>
          </div>
      </div>
  }
}

fn render_traffic(
  traffic: UseStateHandle<Series>,
  pane: UseStateHandle<
    Option<EditorPane>
  >,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<PointDraft>,
  toggle_pane: Callback<EditorPane>
) -> Html {
  let open = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane
        .emit(EditorPane::Traffic);
    })
  };

  let editor = if *pane
    == Some(EditorPane::Traffic)
  {
    render_point_editor(
      traffic.clone(),
      editing_id.clone(),
      draft.clone(),
      "Source Name",
      true
    )
  } else {
    html! {}
  };

  html! {
      <div class="panel wide">
          <div class="panel-head">
              <span class="panel-title">{ "Traffic Sources" }</span>
              <button class="btn primary" onclick={open}>{ "+" }</button>
          </div>
          { editor }
          <PieChart points={traffic.points().to_vec()} />
      </div>
  }
}

/// Shared inline editor for the two
/// dashboard chart series; the
/// traffic variant adds a color
/// picker.
fn render_point_editor(
  series: UseStateHandle<Series>,
  editing_id: UseStateHandle<
    Option<u32>
  >,
  draft: UseStateHandle<PointDraft>,
  label_placeholder: &'static str,
  with_color: bool
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
      let color = if with_color
        && !draft.color.is_empty()
      {
        Some(draft.color.clone())
      } else {
        None
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

  let on_edit_row = {
    let editing_id =
      editing_id.clone();
    let draft = draft.clone();
    Callback::from(
      move |point: SeriesPoint| {
        editing_id
          .set(Some(point.id));
        draft.set(PointDraft {
          label: point.label.clone(),
          value: format!(
            "{}",
            point.value
          ),
          color: point
            .color
            .clone()
            .unwrap_or_default()
        });
      }
    )
  };

  let on_delete_row = {
    let series = series.clone();
    Callback::from(move |id: u32| {
      let mut next =
        (*series).clone();
      next.remove(id);
      series.set(next);
    })
  };

  let suffix =
    if with_color { "%" } else { "" };

  html! {
      <div class="inline-editor">
          <div class="inline-editor-title">
              { if editing_id.is_some() { "Edit Data Point" } else { "Add New Data" } }
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
          {
              if with_color {
                  html! {
                      <input
                          type="color"
                          value={draft.color.clone()}
                          oninput={on_color}
                      />
                  }
              } else {
                  html! {}
              }
          }
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
          { render_point_rows(&series, suffix, on_edit_row, on_delete_row) }
      </div>
  }
}

fn render_activities(
  activities: UseStateHandle<
    Vec<Activity>
  >,
  pane: UseStateHandle<
    Option<EditorPane>
  >,
  draft: UseStateHandle<
    ActivityDraft
  >,
  toggle_pane: Callback<EditorPane>
) -> Html {
  let open = {
    let toggle_pane =
      toggle_pane.clone();
    Callback::from(move |_| {
      toggle_pane
        .emit(EditorPane::Activity);
    })
  };

  let clear_all = {
    let activities =
      activities.clone();
    Callback::from(move |_| {
      activities.set(Vec::new());
    })
  };

  let editor = if *pane
    == Some(EditorPane::Activity)
  {
    let on_user = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(ActivityDraft {
          user: input_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let on_action = {
      let draft = draft.clone();
      Callback::from(move |event| {
        draft.set(ActivityDraft {
          action: input_value(&event),
          ..(*draft).clone()
        });
      })
    };
    let submit = {
      let activities =
        activities.clone();
      let draft = draft.clone();
      Callback::from(move |_| {
        if draft.user.trim().is_empty()
          || draft
            .action
            .trim()
            .is_empty()
        {
          return;
        }
        let next_id = activities
          .iter()
          .map(|activity| activity.id)
          .max()
          .unwrap_or(0)
          + 1;
        let mut next =
          (*activities).clone();
        // Newest entry first, like a
        // feed.
        next.insert(
          0,
          Activity::new(
            next_id,
            draft.user.trim(),
            draft.action.trim(),
            "just now"
          )
        );
        activities.set(next);
        draft.set(
          ActivityDraft::default()
        );
      })
    };

    html! {
        <div class="inline-editor">
            <div class="inline-editor-title">{ "Add New Activity" }</div>
            <input
                type="text"
                placeholder="User Name"
                value={draft.user.clone()}
                oninput={on_user}
            />
            <input
                type="text"
                placeholder="Action"
                value={draft.action.clone()}
                oninput={on_action}
            />
            <div class="form-row">
                <button class="btn primary" onclick={submit}>{ "Add Activity" }</button>
            </div>
        </div>
    }
  } else {
    html! {}
  };

  let rows: Vec<Html> = activities
    .iter()
    .cloned()
    .map(|activity| {
      let remove = {
        let activities =
          activities.clone();
        let id = activity.id;
        Callback::from(move |_| {
          let mut next =
            (*activities).clone();
          next.retain(|activity| {
            activity.id != id
          });
          activities.set(next);
        })
      };
      html! {
          <div class="activity-row">
              <span class="stat-icon"><Icon icon={IconId::Activity} /></span>
              <div class="activity-body">
                  <span>
                      <strong>{ &activity.user }</strong>
                      { format!(" {}", activity.action) }
                  </span>
                  <span class="muted">{ &activity.time }</span>
              </div>
              <button class="btn ghost danger" onclick={remove}>{ "Delete" }</button>
          </div>
      }
    })
    .collect();

  html! {
      <div class="panel">
          <div class="panel-head">
              <span class="panel-title">{ "Recent Activity" }</span>
              <div>
                  <button class="btn primary" onclick={open}>{ "+" }</button>
                  <button class="btn danger" onclick={clear_all}>{ "Clear" }</button>
              </div>
          </div>
          { editor }
          {
              if rows.is_empty() {
                  html! { <p class="empty-state">{ "No activities to show" }</p> }
              } else {
                  html! { <div class="activity-list">{ for rows.into_iter() }</div> }
              }
          }
      </div>
  }
}
