use diesel::prelude::*;

use crate::db::models::project::{NewProject, Project, ProjectChanges};

pub struct ProjectsRepo;

impl ProjectsRepo {
    pub fn insert(conn: &mut PgConnection, new_project: &NewProject) -> Result<Project, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(new_project)
            .returning(Project::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, project_id: i64) -> Result<Option<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects
            .filter(id.eq(project_id))
            .select(Project::as_select())
            .first::<Project>(conn)
            .optional()
    }

    /// One page in insertion order, plus the total row count.
    pub fn page(
        conn: &mut PgConnection,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Project>, i64), diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        let total = projects.count().get_result::<i64>(conn)?;
        let rows = projects
            .select(Project::as_select())
            .order(id.asc())
            .offset(offset)
            .limit(limit)
            .load::<Project>(conn)?;
        Ok((rows, total))
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        project_id: i64,
        changes: &ProjectChanges,
    ) -> Result<Project, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        diesel::update(projects.filter(id.eq(project_id)))
            .set(changes)
            .returning(Project::as_returning())
            .get_result(conn)
    }

    pub fn delete_by_id(conn: &mut PgConnection, project_id: i64) -> Result<usize, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        diesel::delete(projects.filter(id.eq(project_id))).execute(conn)
    }
}
