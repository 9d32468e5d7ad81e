//! Column sorting for the student table.

use std::cmp::Ordering;

use crate::model::student::StudentDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    DateOfBirth,
    Class,
    City,
}

/// Order applied to the rows of the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentSort {
    pub column: SortColumn,
    pub ascending: bool,
}

impl StudentSort {
    /// Sort for a header click: a new column starts ascending, the same column flips.
    pub fn toggle(current: Option<StudentSort>, column: SortColumn) -> StudentSort {
        match current {
            Some(sort) if sort.column == column => StudentSort {
                column,
                ascending: !sort.ascending,
            },
            _ => StudentSort {
                column,
                ascending: true,
            },
        }
    }

    /// Stable sort, so rows with equal keys keep their newest-first order.
    pub fn apply(&self, students: &mut [StudentDto]) {
        students.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    fn compare(&self, a: &StudentDto, b: &StudentDto) -> Ordering {
        match self.column {
            SortColumn::Name => a.child_name.to_lowercase().cmp(&b.child_name.to_lowercase()),
            SortColumn::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            SortColumn::Class => a.class.to_lowercase().cmp(&b.class.to_lowercase()),
            SortColumn::City => a.city.to_lowercase().cmp(&b.city.to_lowercase()),
        }
    }

    /// Arrow shown next to a header.
    pub fn indicator(sort: Option<StudentSort>, column: SortColumn) -> &'static str {
        match sort {
            Some(sort) if sort.column == column && sort.ascending => " ▲",
            Some(sort) if sort.column == column => " ▼",
            _ => "",
        }
    }
}
