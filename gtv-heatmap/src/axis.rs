//! Axis models: tick positions, labels and the domain line.
//!
//! Renderers emit the conventional structure for each axis: a `path.domain`
//! spanning the range with outer ticks at both ends, then one `g.tick` per
//! tick holding a `line` and a `text`.

use gtv_data::month::month_name;
use serde::Serialize;

use crate::layout::{ChartDimensions, LEGEND_RECT_SIZE, LEGEND_TICK_PADDING, LEGEND_TICK_SIZE};
use crate::scales::ChartScales;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Offset along the axis, in the axis' own coordinates.
    pub offset: f64,
    pub label: String,
}

/// Where a tick label sits relative to its tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub dy: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orient: AxisOrient,
    pub ticks: Vec<Tick>,
    pub range: (f64, f64),
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Translation of the axis group.
    pub transform: (f64, f64),
}

impl Axis {
    fn new(orient: AxisOrient, ticks: Vec<Tick>, range: (f64, f64)) -> Self {
        Self {
            orient,
            ticks,
            range,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            transform: (0.0, 0.0),
        }
    }

    /// Same size for inner and outer ticks.
    pub fn with_tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    pub fn with_tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    pub fn with_transform(mut self, x: f64, y: f64) -> Self {
        self.transform = (x, y);
        self
    }

    pub fn transform_attr(&self) -> String {
        format!("translate({}, {})", self.transform.0, self.transform.1)
    }

    /// `d` attribute of the domain path.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let outer = self.tick_size_outer;
        match self.orient {
            AxisOrient::Bottom => format!("M{},{}V0H{}V{}", r0, outer, r1, outer),
            AxisOrient::Left => format!("M{},{}H0V{}H{}", -outer, r0, r1, -outer),
        }
    }

    pub fn tick_transform(&self, tick: &Tick) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({},0)", tick.offset),
            AxisOrient::Left => format!("translate(0,{})", tick.offset),
        }
    }

    /// End point `(x2, y2)` of each tick line; the line starts at the origin.
    pub fn tick_line(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, self.tick_size_inner),
            AxisOrient::Left => (-self.tick_size_inner, 0.0),
        }
    }

    pub fn label_placement(&self) -> LabelPlacement {
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        match self.orient {
            AxisOrient::Bottom => LabelPlacement {
                x: 0.0,
                y: spacing,
                dy: "0.71em",
                anchor: "middle",
            },
            AxisOrient::Left => LabelPlacement {
                x: -spacing,
                y: 0.0,
                dy: "0.32em",
                anchor: "end",
            },
        }
    }
}

/// Year axis under the plot; only years divisible by ten get a tick.
pub fn x_axis(scales: &ChartScales, dimensions: &ChartDimensions) -> Axis {
    let ticks = scales
        .years
        .domain()
        .iter()
        .filter(|year| *year % 10 == 0)
        .filter_map(|year| {
            scales.years.center(year).map(|offset| Tick {
                offset,
                label: year.to_string(),
            })
        })
        .collect();
    Axis::new(AxisOrient::Bottom, ticks, scales.years.range())
        .with_transform(dimensions.plot_offset_x(), dimensions.height)
}

/// Month axis left of the plot; one tick per month, labelled by name.
pub fn y_axis(scales: &ChartScales, dimensions: &ChartDimensions) -> Axis {
    let ticks = scales
        .months
        .domain()
        .iter()
        .filter_map(|month| {
            scales.months.center(month).map(|offset| Tick {
                offset,
                label: month_name(*month),
            })
        })
        .collect();
    Axis::new(AxisOrient::Left, ticks, scales.months.range())
        .with_transform(dimensions.plot_offset_x(), 0.0)
}

/// Linear temperature axis under the legend swatches.
pub fn legend_axis(scales: &ChartScales) -> Axis {
    let ticks = scales
        .legend
        .ticks(10)
        .into_iter()
        .map(|value| Tick {
            offset: scales.legend.scale(value),
            label: scales.legend.tick_format(10, value),
        })
        .collect();
    Axis::new(AxisOrient::Bottom, ticks, scales.legend.range())
        .with_tick_size(LEGEND_TICK_SIZE)
        .with_tick_padding(LEGEND_TICK_PADDING)
        .with_transform(0.0, LEGEND_RECT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::{Dataset, TemperatureRecord};

    fn decade_dataset() -> Dataset {
        let records = (1753..=1781)
            .map(|year| TemperatureRecord {
                year,
                month: 0,
                variance: (year % 7) as f64 * 0.25 - 0.5,
            })
            .collect();
        Dataset::new(8.66, records).unwrap()
    }

    fn scales_for(ds: &Dataset) -> (ChartScales, ChartDimensions) {
        let dims = ChartDimensions::for_record_count(ds.len());
        (ChartScales::from_dataset(ds, &dims), dims)
    }

    #[test]
    fn test_x_axis_ticks_are_decades() {
        let ds = decade_dataset();
        let (scales, dims) = scales_for(&ds);
        let axis = x_axis(&scales, &dims);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1760", "1770", "1780"]);
        let expected: Vec<i32> = ds.years().into_iter().filter(|y| y % 10 == 0).collect();
        let rendered: Vec<i32> = axis
            .ticks
            .iter()
            .map(|t| t.label.parse().unwrap())
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_x_axis_tick_at_band_center() {
        let ds = decade_dataset();
        let (scales, dims) = scales_for(&ds);
        let axis = x_axis(&scales, &dims);
        let band = scales.years.scale(&1760).unwrap();
        assert_eq!(axis.ticks[0].offset, band + scales.years.bandwidth() / 2.0);
        assert_eq!(axis.transform, (60.0, 480.0));
    }

    #[test]
    fn test_y_axis_month_names() {
        let ds = decade_dataset();
        let (scales, dims) = scales_for(&ds);
        let axis = y_axis(&scales, &dims);
        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        assert_eq!(axis.ticks[0].offset, 20.0);
        assert_eq!(axis.ticks[11].label, "December");
        assert_eq!(axis.transform_attr(), "translate(60, 0)");
    }

    #[test]
    fn test_domain_paths() {
        let ds = decade_dataset();
        let (scales, dims) = scales_for(&ds);
        assert_eq!(y_axis(&scales, &dims).domain_path(), "M-6,0H0V480H-6");
        let legend = legend_axis(&scales);
        assert_eq!(legend.domain_path(), "M0,20V0H400V20");
        assert_eq!(legend.tick_line(), (0.0, 20.0));
        assert_eq!(legend.label_placement().y, 25.0);
    }
}
