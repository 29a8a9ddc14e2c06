//! Which color group and which picture within it a card or the detail view shows.
//!
//! Every rendered card owns one [`Selection`] and the detail view owns another.
//! Both start at `(0, 0)` and are thrown away when the card is re-rendered or
//! the detail view closes.

use crate::model::product::ProductRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    group: usize,
    image: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A color swatch was clicked.
    SelectColor(usize),
    /// An arrow was clicked.
    Advance(Direction),
    /// A navigation dot was clicked.
    Jump(usize),
}

/// Arrow and dot controls for a group with more than one picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub len: usize,
    pub active: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> usize {
        self.group
    }

    pub fn image(&self) -> usize {
        self.image
    }

    /// Applies one user event and returns the next state.
    pub fn apply(self, event: SelectionEvent, product: &ProductRecord) -> Self {
        match event {
            SelectionEvent::SelectColor(group) => Self { group, image: 0 },
            SelectionEvent::Advance(direction) => {
                let len = self.images(product).len();
                if len <= 1 {
                    return self;
                }
                let current = self.image.min(len - 1);
                let image = match direction {
                    Direction::Next => (current + 1) % len,
                    Direction::Prev => (current + len - 1) % len,
                };
                Self { image, ..self }
            }
            SelectionEvent::Jump(image) => {
                let len = self.images(product).len();
                if len <= 1 || image >= len {
                    return self;
                }
                Self { image, ..self }
            }
        }
    }

    /// Pictures of the selected color; empty when the product has no such group.
    pub fn images<'a>(&self, product: &'a ProductRecord) -> &'a [String] {
        product.image_group(self.group)
    }

    pub fn displayed_image<'a>(&self, product: &'a ProductRecord, placeholder: &'a str) -> &'a str {
        self.images(product)
            .get(self.image)
            .map(String::as_str)
            .unwrap_or(placeholder)
    }

    /// `None` hides the arrows and dots.
    pub fn navigation(&self, product: &ProductRecord) -> Option<Navigation> {
        let len = self.images(product).len();
        (len > 1).then(|| Navigation {
            len,
            active: self.image.min(len - 1),
        })
    }
}

impl Navigation {
    /// `(index, is_active)` for every dot.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |index| (index, index == self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::StockStatus;

    const PLACEHOLDER: &str = "placeholder.png";

    fn product(groups: &[&[&str]]) -> ProductRecord {
        ProductRecord {
            id: "1".into(),
            name: "Shirt".into(),
            category: "men".into(),
            description: String::new(),
            colors: vec!["Red".into(), "Blue".into(), "Green".into()],
            image_groups: groups
                .iter()
                .map(|group| group.iter().map(|url| url.to_string()).collect())
                .collect(),
            original_price: 0.0,
            selling_price: 0.0,
            stock_quantity: 1,
            discount_percentage: 0,
            stock_status: StockStatus::LowStock,
        }
    }

    fn advance(mut selection: Selection, direction: Direction, times: usize, product: &ProductRecord) -> Selection {
        for _ in 0..times {
            selection = selection.apply(SelectionEvent::Advance(direction), product);
        }
        selection
    }

    #[test]
    fn starts_on_first_image_of_first_group() {
        let p = product(&[&["a", "b"], &["c"]]);
        let selection = Selection::new();
        assert_eq!((selection.group(), selection.image()), (0, 0));
        assert_eq!(selection.displayed_image(&p, PLACEHOLDER), "a");
        assert_eq!(selection.navigation(&p), Some(Navigation { len: 2, active: 0 }));
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let p = product(&[&["a", "b", "c"]]);
        let last = advance(Selection::new(), Direction::Next, 2, &p);
        assert_eq!(last.image(), 2);
        assert_eq!(advance(last, Direction::Next, 1, &p).image(), 0);
        assert_eq!(advance(Selection::new(), Direction::Prev, 1, &p).image(), 2);
        assert_eq!(advance(Selection::new(), Direction::Next, 3, &p), Selection::new());
    }

    #[test]
    fn single_image_groups_have_no_navigation() {
        let p = product(&[&["a"], &[]]);
        let selection = advance(Selection::new(), Direction::Next, 3, &p);
        assert_eq!(selection.image(), 0);
        assert_eq!(selection.navigation(&p), None);

        let empty = Selection::new().apply(SelectionEvent::SelectColor(1), &p);
        assert_eq!(advance(empty, Direction::Prev, 2, &p).image(), 0);
        assert_eq!(empty.navigation(&p), None);
    }

    #[test]
    fn selecting_a_color_resets_the_image() {
        let p = product(&[&["a", "b"], &["c", "d", "e"]]);
        let moved = advance(Selection::new(), Direction::Next, 1, &p);
        let blue = moved.apply(SelectionEvent::SelectColor(1), &p);
        assert_eq!((blue.group(), blue.image()), (1, 0));
        assert_eq!(blue.displayed_image(&p, PLACEHOLDER), "c");
        assert_eq!(blue.navigation(&p), Some(Navigation { len: 3, active: 0 }));
    }

    #[test]
    fn color_without_images_shows_placeholder() {
        let p = product(&[&["a", "b"], &[]]);
        for color in [1, 2] {
            let selection = Selection::new().apply(SelectionEvent::SelectColor(color), &p);
            assert_eq!(selection.displayed_image(&p, PLACEHOLDER), PLACEHOLDER);
            assert_eq!(selection.navigation(&p), None);
        }
    }

    #[test]
    fn jump_ignores_out_of_range_dots() {
        let p = product(&[&["a", "b", "c"]]);
        let jumped = Selection::new().apply(SelectionEvent::Jump(2), &p);
        assert_eq!(jumped.image(), 2);
        assert_eq!(jumped.apply(SelectionEvent::Jump(7), &p).image(), 2);
        let dots: Vec<_> = jumped.navigation(&p).unwrap().dots().collect();
        assert_eq!(dots, vec![(0, false), (1, false), (2, true)]);
    }
}
