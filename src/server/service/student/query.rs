use crate::{
    model::student::{StudentDetailDto, StudentDto, StudentPageDto},
    server::{
        data::{pickup_person::PickupPersonRepository, student::StudentRepository},
        error::{student::StudentError, Error},
        service::student::{StudentService, STUDENTS_PER_PAGE},
    },
};

impl<'a> StudentService<'a> {
    /// Fetches a student with its pickup persons ordered by id.
    pub async fn get_student(&self, student_id: i32) -> Result<StudentDetailDto, Error> {
        let student = StudentRepository::new(self.db)
            .find(student_id)
            .await?
            .ok_or(StudentError::NotFound(student_id))?;

        let pickup_persons = PickupPersonRepository::new(self.db)
            .get_by_student(student.id)
            .await?;

        Ok(StudentDetailDto::from((student, pickup_persons)))
    }

    /// Lists students newest first, [`STUDENTS_PER_PAGE`] at a time.
    ///
    /// `page` is 1-based, anything below 1 is treated as the first page and pages past the
    /// last one come back empty. A blank `search` is ignored, otherwise it matches literally.
    pub async fn list_students(
        &self,
        page: u64,
        search: Option<&str>,
    ) -> Result<StudentPageDto, Error> {
        let page = page.max(1);
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let (students, totals) = StudentRepository::new(self.db)
            .paginate(page - 1, STUDENTS_PER_PAGE, search)
            .await?;

        let last_page = totals.number_of_pages.max(1);
        let count = students.len() as u64;
        let from = (count > 0).then(|| (page - 1) * STUDENTS_PER_PAGE + 1);
        let to = from.map(|from| from + count - 1);

        Ok(StudentPageDto {
            data: students.into_iter().map(StudentDto::from).collect(),
            current_page: page,
            last_page,
            per_page: STUDENTS_PER_PAGE,
            total: totals.number_of_items,
            from,
            to,
            next_page: (page < last_page).then(|| page + 1),
            prev_page: (page > 1).then(|| page - 1),
        })
    }
}
