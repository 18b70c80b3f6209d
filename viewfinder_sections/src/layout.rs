// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated section layout: grid placement, focus poses, radial targets.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use smallvec::SmallVec;

use viewfinder_space::{CameraPose, CanvasBounds, Compass, Viewframe};

/// Handle to a section within the [`SectionLayout`] that produced it.
///
/// Ids are dense indices assigned in registration order; they are only
/// meaningful against their own layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(u16);

impl SectionId {
    /// Returns the dense index of this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section#{}", self.0)
    }
}

/// A cell address in the section grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Zero-based row, growing downward.
    pub row: u16,
    /// Zero-based column, growing rightward.
    pub col: u16,
}

impl GridCell {
    /// Creates a cell address.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Static configuration for one section, supplied at layout construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionSpec {
    /// Stable external name, e.g. `"projects"`. Unique within a layout.
    pub name: &'static str,
    /// Grid placement. Unique within a layout.
    pub cell: GridCell,
    /// Camera scale used when this section is brought into focus.
    pub focus_scale: f64,
}

impl SectionSpec {
    /// Creates a spec with the default focus scale of `1.0`.
    #[must_use]
    pub const fn new(name: &'static str, cell: GridCell) -> Self {
        Self {
            name,
            cell,
            focus_scale: 1.0,
        }
    }
}

/// A resolved section: spec plus computed canvas placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Section {
    name: &'static str,
    cell: GridCell,
    rect: Rect,
    focus: CameraPose,
}

impl Section {
    /// Returns the section's external name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the section's grid placement.
    #[must_use]
    pub fn cell(&self) -> GridCell {
        self.cell
    }

    /// Returns the section's canvas-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the camera pose that brings this section into focus.
    #[must_use]
    pub fn focus(&self) -> CameraPose {
        self.focus
    }

    /// Returns this section's screen-space rectangle under the given pose.
    ///
    /// Purely derived from the committed pose: sections never move
    /// themselves, the camera moves over them.
    #[must_use]
    pub fn screen_rect(&self, view: Viewframe, pose: CameraPose) -> Rect {
        let tl = view.canvas_to_screen(self.rect.origin(), pose);
        let br = view.canvas_to_screen(kurbo::Point::new(self.rect.x1, self.rect.y1), pose);
        Rect::new(tl.x, tl.y, br.x, br.y)
    }

    /// Returns `true` if any part of this section is visible through the view.
    #[must_use]
    pub fn is_visible(&self, view: Viewframe, pose: CameraPose) -> bool {
        let visible = view.visible_canvas_rect(pose);
        self.rect.intersect(visible).area() > 0.0
    }
}

/// Error from [`SectionLayout::new`].
///
/// Layout construction is the configuration boundary: a bad table is a
/// programming error surfaced to the embedding application, not a state the
/// navigation layer tries to work around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No sections were supplied.
    Empty,
    /// Two sections share a name.
    DuplicateName(&'static str),
    /// Two sections share a grid cell.
    DuplicateCell(GridCell),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "section table is empty"),
            Self::DuplicateName(name) => {
                write!(f, "duplicate section name {name:?}")
            }
            Self::DuplicateCell(cell) => {
                write!(f, "duplicate grid cell ({}, {})", cell.row, cell.col)
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// Immutable, validated layout of sections on the canvas plane.
///
/// Built once at startup from a fixed table and never mutated: sections own
/// no state, and all navigation queries (`id` lookup, focus poses, radial
/// targets) are pure reads. The layout also derives the [`CanvasBounds`]
/// the camera is clamped against.
///
/// Content is deliberately not modeled here; embedders associate whatever
/// renderable payload they have with each [`SectionId`].
///
/// # Example
///
/// ```
/// use viewfinder_sections::SectionLayout;
///
/// let layout = SectionLayout::portfolio();
/// let projects = layout.id("projects").unwrap();
/// let focus = layout.get(projects).unwrap().focus();
/// assert!(layout.bounds().contains(focus));
/// ```
#[derive(Clone, Debug)]
pub struct SectionLayout {
    sections: Vec<Section>,
    by_name: HashMap<&'static str, SectionId>,
    bounds: CanvasBounds,
}

impl SectionLayout {
    /// Builds a layout from a section table.
    ///
    /// `cell_size` and `gap` define the grid geometry: a cell at
    /// `(row, col)` occupies a `cell_size` rectangle offset by
    /// `col * (width + gap)` horizontally and `row * (height + gap)`
    /// vertically. `scale_range` becomes the camera's legal scale range;
    /// each section's focus scale is clamped into it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the table is empty or contains duplicate
    /// names or cells.
    pub fn new(
        cell_size: Size,
        gap: f64,
        scale_range: (f64, f64),
        specs: &[SectionSpec],
    ) -> Result<Self, LayoutError> {
        if specs.is_empty() {
            return Err(LayoutError::Empty);
        }
        assert!(
            specs.len() <= usize::from(u16::MAX),
            "section table exceeds id space"
        );

        let mut by_name = HashMap::with_capacity(specs.len());
        let mut cells = HashMap::with_capacity(specs.len());
        let mut sections = Vec::with_capacity(specs.len());
        let mut union: Option<Rect> = None;

        let step_x = cell_size.width + gap;
        let step_y = cell_size.height + gap;

        for (index, spec) in specs.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "table length bounded below u16::MAX")]
            let id = SectionId(index as u16);
            if by_name.insert(spec.name, id).is_some() {
                return Err(LayoutError::DuplicateName(spec.name));
            }
            if cells.insert(spec.cell, id).is_some() {
                return Err(LayoutError::DuplicateCell(spec.cell));
            }

            let x0 = f64::from(spec.cell.col) * step_x;
            let y0 = f64::from(spec.cell.row) * step_y;
            let rect = Rect::new(x0, y0, x0 + cell_size.width, y0 + cell_size.height);
            union = Some(match union {
                Some(u) => u.union(rect),
                None => rect,
            });

            let focus_scale = if spec.focus_scale.is_finite() && spec.focus_scale > 0.0 {
                spec.focus_scale
            } else {
                1.0
            };
            sections.push(Section {
                name: spec.name,
                cell: spec.cell,
                rect,
                focus: CameraPose::new(rect.center(), focus_scale),
            });
        }

        let rect = union.unwrap_or(Rect::ZERO);
        let bounds = CanvasBounds::new(rect, scale_range.0, scale_range.1);

        // Clamp each focus pose now so navigation targets are always legal.
        for section in &mut sections {
            section.focus = bounds.clamp(section.focus);
        }

        Ok(Self {
            sections,
            by_name,
            bounds,
        })
    }

    /// The standard six-section portfolio table in a 2×3 grid.
    ///
    /// Sections: `hero`, `about`, `projects` across the top row;
    /// `gallery`, `journal`, `contact` across the bottom.
    #[must_use]
    pub fn portfolio() -> Self {
        let specs = [
            SectionSpec::new("hero", GridCell::new(0, 0)),
            SectionSpec::new("about", GridCell::new(0, 1)),
            SectionSpec::new("projects", GridCell::new(0, 2)),
            SectionSpec::new("gallery", GridCell::new(1, 0)),
            SectionSpec::new("journal", GridCell::new(1, 1)),
            SectionSpec::new("contact", GridCell::new(1, 2)),
        ];
        match Self::new(Size::new(1280.0, 800.0), 160.0, (0.25, 4.0), &specs) {
            Ok(layout) => layout,
            // The table above is statically valid.
            Err(_) => unreachable!(),
        }
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the layout has no sections.
    ///
    /// Construction rejects empty tables, so this is always `false` for a
    /// built layout; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Looks up a section id by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<SectionId> {
        self.by_name.get(name).copied()
    }

    /// Returns the section for an id, if the id belongs to this layout.
    #[must_use]
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.index())
    }

    /// Iterates over `(id, section)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &Section)> + '_ {
        self.sections.iter().enumerate().map(|(index, section)| {
            #[expect(clippy::cast_possible_truncation, reason = "ids were assigned from u16")]
            let id = SectionId(index as u16);
            (id, section)
        })
    }

    /// Returns the canvas bounds derived from the section rectangles.
    #[must_use]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Returns the section (other than `from`) whose center is nearest in
    /// each compass direction.
    ///
    /// Each populated direction shows exactly one target: when several
    /// sections lie the same way, the closest wins, with registration order
    /// breaking exact ties. Sections shadowed by a nearer neighbor stay
    /// reachable by chained hops or direct jumps. The result is ordered
    /// clockwise from north and has at most eight entries.
    #[must_use]
    pub fn radial_targets(&self, from: SectionId) -> SmallVec<[(Compass, SectionId); 8]> {
        let mut best: [Option<(f64, SectionId)>; 8] = [None; 8];
        let Some(origin) = self.get(from) else {
            return SmallVec::new();
        };
        let origin_center = origin.rect.center();

        for (id, section) in self.iter() {
            if id == from {
                continue;
            }
            let v = section.rect.center() - origin_center;
            let Some(dir) = Compass::nearest(v) else {
                continue;
            };
            let dist = v.hypot();
            let slot = &mut best[dir.index()];
            if slot.is_none_or(|(d, _)| dist < d) {
                *slot = Some((dist, id));
            }
        }

        Compass::ALL
            .iter()
            .filter_map(|dir| best[dir.index()].map(|(_, id)| (*dir, id)))
            .collect()
    }

    /// Resolves a compass direction from a section to its radial target.
    #[must_use]
    pub fn target_in_direction(&self, from: SectionId, dir: Compass) -> Option<SectionId> {
        self.radial_targets(from)
            .iter()
            .find(|(d, _)| *d == dir)
            .map(|(_, id)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_has_six_unique_sections() {
        let layout = SectionLayout::portfolio();
        assert_eq!(layout.len(), 6);
        for name in ["hero", "about", "projects", "gallery", "journal", "contact"] {
            assert!(layout.id(name).is_some(), "missing {name}");
        }
        assert!(layout.id("nonexistent").is_none());
    }

    #[test]
    fn empty_table_is_rejected() {
        let result = SectionLayout::new(Size::new(100.0, 100.0), 0.0, (0.5, 2.0), &[]);
        assert_eq!(result.unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let specs = [
            SectionSpec::new("a", GridCell::new(0, 0)),
            SectionSpec::new("a", GridCell::new(0, 1)),
        ];
        let result = SectionLayout::new(Size::new(100.0, 100.0), 0.0, (0.5, 2.0), &specs);
        assert_eq!(result.unwrap_err(), LayoutError::DuplicateName("a"));
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        let specs = [
            SectionSpec::new("a", GridCell::new(1, 1)),
            SectionSpec::new("b", GridCell::new(1, 1)),
        ];
        let result = SectionLayout::new(Size::new(100.0, 100.0), 0.0, (0.5, 2.0), &specs);
        assert_eq!(result.unwrap_err(), LayoutError::DuplicateCell(GridCell::new(1, 1)));
    }

    #[test]
    fn grid_geometry_offsets_by_cell_and_gap() {
        let specs = [
            SectionSpec::new("a", GridCell::new(0, 0)),
            SectionSpec::new("b", GridCell::new(1, 2)),
        ];
        let layout =
            SectionLayout::new(Size::new(100.0, 50.0), 10.0, (0.5, 2.0), &specs).unwrap();
        let b = layout.get(layout.id("b").unwrap()).unwrap();
        assert_eq!(b.rect(), Rect::new(220.0, 60.0, 320.0, 110.0));
    }

    #[test]
    fn focus_poses_are_inside_bounds() {
        let layout = SectionLayout::portfolio();
        for (_, section) in layout.iter() {
            assert!(layout.bounds().contains(section.focus()));
        }
    }

    #[test]
    fn degenerate_focus_scale_falls_back() {
        let specs = [SectionSpec {
            name: "a",
            cell: GridCell::new(0, 0),
            focus_scale: f64::NAN,
        }];
        let layout =
            SectionLayout::new(Size::new(100.0, 100.0), 0.0, (0.5, 2.0), &specs).unwrap();
        let a = layout.get(layout.id("a").unwrap()).unwrap();
        assert_eq!(a.focus().scale, 1.0);
    }

    #[test]
    fn radial_targets_are_nearest_per_direction() {
        let layout = SectionLayout::portfolio();
        let hero = layout.id("hero").unwrap();
        let targets = layout.radial_targets(hero);

        // From the top-left corner of the 2x3 grid, three directions are
        // populated: east (about, shadowing projects), south-east
        // (journal), and south (gallery, shadowing nothing).
        let expected = [
            (Compass::East, layout.id("about").unwrap()),
            (Compass::SouthEast, layout.id("journal").unwrap()),
            (Compass::South, layout.id("gallery").unwrap()),
        ];
        assert_eq!(targets.len(), 3);
        for pair in expected {
            assert!(targets.contains(&pair), "missing {pair:?}");
        }

        let reached: Vec<SectionId> = targets.iter().map(|(_, id)| *id).collect();
        assert!(!reached.contains(&hero));
    }

    #[test]
    fn radial_targets_point_the_right_way() {
        let layout = SectionLayout::portfolio();
        let hero = layout.id("hero").unwrap();
        let about = layout.id("about").unwrap();
        let gallery = layout.id("gallery").unwrap();
        let journal = layout.id("journal").unwrap();

        assert_eq!(layout.target_in_direction(hero, Compass::East), Some(about));
        assert_eq!(layout.target_in_direction(hero, Compass::South), Some(gallery));
        assert_eq!(
            layout.target_in_direction(hero, Compass::SouthEast),
            Some(journal)
        );
        assert_eq!(layout.target_in_direction(hero, Compass::West), None);
    }

    #[test]
    fn nearer_section_wins_a_shared_direction() {
        let layout = SectionLayout::portfolio();
        let hero = layout.id("hero").unwrap();
        let about = layout.id("about").unwrap();
        // "about" and "projects" are both due east of hero; the nearer wins.
        assert_eq!(layout.target_in_direction(hero, Compass::East), Some(about));
    }

    #[test]
    fn screen_rect_scales_with_zoom() {
        let layout = SectionLayout::portfolio();
        let view = Viewframe::new(Size::new(1280.0, 720.0));
        let hero = layout.get(layout.id("hero").unwrap()).unwrap();

        let far = hero.screen_rect(view, CameraPose::new(hero.rect().center(), 0.5));
        let near = hero.screen_rect(view, CameraPose::new(hero.rect().center(), 2.0));
        assert!((far.width() - hero.rect().width() * 0.5).abs() < 1e-9);
        assert!((near.width() - hero.rect().width() * 2.0).abs() < 1e-9);
        // Focused section is centered in the view either way.
        assert!((near.center().x - 640.0).abs() < 1e-9);
    }

    #[test]
    fn visibility_follows_the_camera() {
        let layout = SectionLayout::portfolio();
        let view = Viewframe::new(Size::new(1280.0, 720.0));
        let hero = layout.get(layout.id("hero").unwrap()).unwrap();
        let contact = layout.get(layout.id("contact").unwrap()).unwrap();

        let at_hero = CameraPose::new(hero.rect().center(), 1.0);
        assert!(hero.is_visible(view, at_hero));
        assert!(!contact.is_visible(view, at_hero));

        // Zoomed all the way out over the canvas center, everything shows.
        let overview = CameraPose::new(layout.bounds().rect().center(), 0.25);
        for (_, section) in layout.iter() {
            assert!(section.is_visible(view, overview));
        }
    }

    #[test]
    fn radial_targets_for_foreign_id_are_empty() {
        let layout = SectionLayout::portfolio();
        let foreign = SectionId(999);
        assert!(layout.radial_targets(foreign).is_empty());
    }
}
