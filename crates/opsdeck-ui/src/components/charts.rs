//! Declarative SVG charts over series points. Geometry only; every
//! number is recomputed from the collection on render.

use opsdeck_core::series::{
  PerfRow,
  SeriesPoint
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::point_color;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 28.0;

fn inner_width() -> f64 {
  WIDTH - PAD * 2.0
}

fn inner_height() -> f64 {
  HEIGHT - PAD * 2.0
}

fn x_at(
  index: usize,
  count: usize
) -> f64 {
  let step = inner_width()
    / count.saturating_sub(1).max(1)
      as f64;
  PAD + index as f64 * step
}

fn y_at(
  value: f64,
  max: f64
) -> f64 {
  let clamped =
    (value / max).clamp(0.0, 1.0);
  PAD
    + inner_height()
      * (1.0 - clamped)
}

fn polyline_points(
  values: &[f64],
  max: f64
) -> String {
  values
    .iter()
    .enumerate()
    .map(|(index, value)| {
      format!(
        "{:.1},{:.1}",
        x_at(index, values.len()),
        y_at(*value, max)
      )
    })
    .collect::<Vec<_>>()
    .join(" ")
}

fn empty_chart(
  message: &str
) -> Html {
  html! {
      <div class="chart-empty">{ message }</div>
  }
}

#[derive(Properties, PartialEq)]
pub struct AreaChartProps {
  pub points: Vec<SeriesPoint>,
  #[prop_or_else(|| "#3B82F6".to_string())]
  pub color:  String
}

#[function_component(AreaChart)]
pub fn area_chart(
  props: &AreaChartProps
) -> Html {
  if props.points.is_empty() {
    return empty_chart(
      "No data points yet"
    );
  }

  let values: Vec<f64> = props
    .points
    .iter()
    .map(|point| point.value)
    .collect();
  let max = values
    .iter()
    .copied()
    .fold(0.0, f64::max)
    .max(1.0);

  let line =
    polyline_points(&values, max);
  let baseline = PAD + inner_height();
  let area = format!(
    "{line} {:.1},{baseline:.1} {PAD:.1},{baseline:.1}",
    x_at(
      values.len() - 1,
      values.len()
    )
  );

  html! {
      <svg class="chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")}>
          <line
              class="chart-axis"
              x1={PAD.to_string()}
              y1={baseline.to_string()}
              x2={(WIDTH - PAD).to_string()}
              y2={baseline.to_string()}
          />
          <polygon points={area} fill={props.color.clone()} opacity="0.15" />
          <polyline
              points={line}
              fill="none"
              stroke={props.color.clone()}
              stroke-width="2"
          />
          {
              for props.points.iter().enumerate().map(|(index, point)| {
                  let x = x_at(index, props.points.len());
                  let y = y_at(point.value, max);
                  html! {
                      <>
                          <circle
                              cx={format!("{x:.1}")}
                              cy={format!("{y:.1}")}
                              r="3"
                              fill={props.color.clone()}
                          />
                          <text
                              class="chart-label"
                              x={format!("{x:.1}")}
                              y={(HEIGHT - 6.0).to_string()}
                              text-anchor="middle"
                          >
                              { &point.label }
                          </text>
                      </>
                  }
              })
          }
      </svg>
  }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
  pub points: Vec<SeriesPoint>
}

#[function_component(BarChart)]
pub fn bar_chart(
  props: &BarChartProps
) -> Html {
  if props.points.is_empty() {
    return empty_chart(
      "No data points yet"
    );
  }

  let max = props
    .points
    .iter()
    .map(|point| point.value)
    .fold(0.0, f64::max)
    .max(1.0);
  let count = props.points.len();
  let slot = inner_width()
    / count as f64;
  let bar_width = slot * 0.6;
  let baseline = PAD + inner_height();

  html! {
      <svg class="chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")}>
          <line
              class="chart-axis"
              x1={PAD.to_string()}
              y1={baseline.to_string()}
              x2={(WIDTH - PAD).to_string()}
              y2={baseline.to_string()}
          />
          {
              for props.points.iter().enumerate().map(|(index, point)| {
                  let x = PAD + slot * index as f64 + (slot - bar_width) / 2.0;
                  let top = y_at(point.value, max);
                  let height = (baseline - top).max(0.0);
                  let center = x + bar_width / 2.0;
                  html! {
                      <>
                          <rect
                              x={format!("{x:.1}")}
                              y={format!("{top:.1}")}
                              width={format!("{bar_width:.1}")}
                              height={format!("{height:.1}")}
                              rx="3"
                              fill={point_color(point, index)}
                          />
                          <text
                              class="chart-label"
                              x={format!("{center:.1}")}
                              y={(HEIGHT - 6.0).to_string()}
                              text-anchor="middle"
                          >
                              { &point.label }
                          </text>
                      </>
                  }
              })
          }
      </svg>
  }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
  pub points: Vec<SeriesPoint>
}

/// Donut chart: one annulus segment
/// per point, plus a legend with
/// each point's share.
#[function_component(PieChart)]
pub fn pie_chart(
  props: &PieChartProps
) -> Html {
  let total: f64 = props
    .points
    .iter()
    .map(|point| point.value)
    .sum();
  if props.points.is_empty()
    || total <= 0.0
  {
    return empty_chart(
      "No data points yet"
    );
  }

  let size = 240.0;
  let center = size / 2.0;
  let outer = 100.0;
  let inner = 55.0;

  let mut start = -90.0_f64;
  let segments: Vec<Html> = props
    .points
    .iter()
    .enumerate()
    .map(|(index, point)| {
      let fraction =
        point.value / total;
      let sweep = fraction * 360.0;
      let color =
        point_color(point, index);
      let segment = if fraction
        >= 0.999
      {
        // A full ring; an arc with
        // coincident endpoints
        // renders as nothing.
        html! {
            <circle
                cx={center.to_string()}
                cy={center.to_string()}
                r={((outer + inner) / 2.0).to_string()}
                fill="none"
                stroke={color}
                stroke-width={(outer - inner).to_string()}
            />
        }
      } else {
        let path = annulus_path(
          center, outer, inner,
          start, sweep
        );
        html! {
            <path d={path} fill={color} />
        }
      };
      start += sweep;
      segment
    })
    .collect();

  html! {
      <div class="pie-wrap">
          <svg class="chart pie" viewBox={format!("0 0 {size} {size}")}>
              { for segments.into_iter() }
          </svg>
          <div class="pie-legend">
              {
                  for props.points.iter().enumerate().map(|(index, point)| {
                      let share = point.value / total * 100.0;
                      html! {
                          <div class="legend-item">
                              <span
                                  class="legend-dot"
                                  style={format!("background:{}", point_color(point, index))}
                              ></span>
                              <span>{ format!("{} ({share:.0}%)", point.label) }</span>
                          </div>
                      }
                  })
              }
          </div>
      </div>
  }
}

fn annulus_path(
  center: f64,
  outer: f64,
  inner: f64,
  start_deg: f64,
  sweep_deg: f64
) -> String {
  let start =
    start_deg.to_radians();
  let end = (start_deg + sweep_deg)
    .to_radians();
  let large =
    if sweep_deg > 180.0 { 1 } else { 0 };

  let (ox1, oy1) = (
    center + outer * start.cos(),
    center + outer * start.sin()
  );
  let (ox2, oy2) = (
    center + outer * end.cos(),
    center + outer * end.sin()
  );
  let (ix1, iy1) = (
    center + inner * start.cos(),
    center + inner * start.sin()
  );
  let (ix2, iy2) = (
    center + inner * end.cos(),
    center + inner * end.sin()
  );

  format!(
    "M {ox1:.2} {oy1:.2} \
     A {outer:.2} {outer:.2} 0 {large} 1 {ox2:.2} {oy2:.2} \
     L {ix2:.2} {iy2:.2} \
     A {inner:.2} {inner:.2} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
  )
}

const PERF_MEASURES: [(&str, &str); 3] = [
  ("Sales", "#3B82F6"),
  ("Users", "#8B5CF6"),
  ("Revenue", "#10B981")
];

#[derive(Properties, PartialEq)]
pub struct MultiLineChartProps {
  pub rows: Vec<PerfRow>
}

#[function_component(MultiLineChart)]
pub fn multi_line_chart(
  props: &MultiLineChartProps
) -> Html {
  if props.rows.is_empty() {
    return empty_chart(
      "No data points yet"
    );
  }

  let max = props
    .rows
    .iter()
    .flat_map(|row| {
      [row.sales, row.users, row.revenue]
    })
    .fold(0.0, f64::max)
    .max(1.0);

  let measures: [Vec<f64>; 3] = [
    props
      .rows
      .iter()
      .map(|row| row.sales)
      .collect(),
    props
      .rows
      .iter()
      .map(|row| row.users)
      .collect(),
    props
      .rows
      .iter()
      .map(|row| row.revenue)
      .collect()
  ];
  let baseline = PAD + inner_height();

  html! {
      <div>
          <svg class="chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")}>
              <line
                  class="chart-axis"
                  x1={PAD.to_string()}
                  y1={baseline.to_string()}
                  x2={(WIDTH - PAD).to_string()}
                  y2={baseline.to_string()}
              />
              {
                  for measures.iter().zip(PERF_MEASURES).map(|(values, (_, color))| {
                      html! {
                          <polyline
                              points={polyline_points(values, max)}
                              fill="none"
                              stroke={color}
                              stroke-width="2"
                          />
                      }
                  })
              }
              {
                  for props.rows.iter().enumerate().map(|(index, row)| {
                      let x = x_at(index, props.rows.len());
                      html! {
                          <text
                              class="chart-label"
                              x={format!("{x:.1}")}
                              y={(HEIGHT - 6.0).to_string()}
                              text-anchor="middle"
                          >
                              { &row.label }
                          </text>
                      }
                  })
              }
          </svg>
          <div class="pie-legend">
              {
                  for PERF_MEASURES.into_iter().map(|(label, color)| html! {
                      <div class="legend-item">
                          <span class="legend-dot" style={format!("background:{color}")}></span>
                          <span>{ label }</span>
                      </div>
                  })
              }
          </div>
      </div>
  }
}
