//! Translate subcommands into page events.

use crate::cli::{
    BookmarkOperation, DepsOperation, FaqOperation, LocationOperation, ProjectOperation,
    TeamOperation, TechOperation, WorkOperation,
};
use team_portal::pages::{
    BookmarkField, DependencyField, FaqField, LocationField, ProjectEvent, ProjectField,
    TeamEvent, WorkDetailsEvent,
};

pub fn work_events(op: WorkOperation) -> Vec<WorkDetailsEvent> {
    let mut events = Vec::new();
    match op {
        WorkOperation::Show => return events,
        WorkOperation::Set {
            unity,
            email,
            escalate,
        } => {
            events.extend(unity.map(WorkDetailsEvent::EditUnity));
            events.extend(email.map(WorkDetailsEvent::EditEmail));
            events.extend(escalate.map(WorkDetailsEvent::EditEscalate));
        }
        WorkOperation::Location(LocationOperation::Add { place, time }) => {
            events.push(WorkDetailsEvent::EditDraftLocation(LocationField::Place, place));
            events.push(WorkDetailsEvent::EditDraftLocation(LocationField::Time, time));
            events.push(WorkDetailsEvent::AddLocation);
        }
        WorkOperation::Location(LocationOperation::Delete { index }) => {
            events.push(WorkDetailsEvent::DeleteLocation(index));
        }
    }
    events.push(WorkDetailsEvent::Save);
    events
}

pub fn team_events(op: TeamOperation) -> Vec<TeamEvent> {
    match op {
        TeamOperation::Show => Vec::new(),
        TeamOperation::Details { name, focus } => {
            let mut events: Vec<_> = name
                .map(TeamEvent::EditTeamName)
                .into_iter()
                .chain(focus.map(TeamEvent::EditProductFocus))
                .collect();
            events.push(TeamEvent::SaveTeamDetails);
            events
        }
        TeamOperation::Bookmark(BookmarkOperation::Add { title, description }) => vec![
            TeamEvent::EditDraftBookmark(BookmarkField::Title, title),
            TeamEvent::EditDraftBookmark(BookmarkField::Description, description),
            TeamEvent::AddBookmark,
        ],
        TeamOperation::Bookmark(BookmarkOperation::Update {
            id,
            title,
            description,
        }) => {
            let edits = [
                (BookmarkField::Title, title),
                (BookmarkField::Description, description),
            ];
            let mut events: Vec<_> = edits
                .into_iter()
                .filter_map(|(field, value)| value.map(|value| TeamEvent::EditBookmark { id, field, value }))
                .collect();
            events.push(TeamEvent::SaveBookmark(id));
            events
        }
        TeamOperation::Bookmark(BookmarkOperation::Delete { id }) => vec![TeamEvent::DeleteBookmark(id)],
        TeamOperation::Faq(FaqOperation::Add { question, answer }) => vec![
            TeamEvent::EditDraftFaq(FaqField::Question, question),
            TeamEvent::EditDraftFaq(FaqField::Answer, answer),
            TeamEvent::AddFaq,
        ],
        TeamOperation::Faq(FaqOperation::Update {
            id,
            question,
            answer,
        }) => {
            let edits = [(FaqField::Question, question), (FaqField::Answer, answer)];
            let mut events: Vec<_> = edits
                .into_iter()
                .filter_map(|(field, value)| value.map(|value| TeamEvent::EditFaq { id, field, value }))
                .collect();
            events.push(TeamEvent::SaveFaq(id));
            events
        }
        TeamOperation::Faq(FaqOperation::Delete { id }) => vec![TeamEvent::DeleteFaq(id)],
    }
}

pub fn project_events(op: ProjectOperation) -> Vec<ProjectEvent> {
    match op {
        ProjectOperation::Show => Vec::new(),
        ProjectOperation::Tech(TechOperation::Add { name }) => {
            vec![ProjectEvent::EditDraftTech(name), ProjectEvent::AddTech]
        }
        ProjectOperation::Tech(TechOperation::Delete { index }) => vec![ProjectEvent::DeleteTech(index)],
        ProjectOperation::Add {
            title,
            url,
            description,
        } => vec![
            ProjectEvent::EditDraftProject(ProjectField::Title, title),
            ProjectEvent::EditDraftProject(ProjectField::Url, url),
            ProjectEvent::EditDraftProject(ProjectField::Description, description),
            ProjectEvent::AddProject,
        ],
        ProjectOperation::Update {
            id,
            title,
            url,
            description,
        } => {
            let edits = [
                (ProjectField::Title, title),
                (ProjectField::Url, url),
                (ProjectField::Description, description),
            ];
            let mut events: Vec<_> = edits
                .into_iter()
                .filter_map(|(field, value)| value.map(|value| ProjectEvent::EditProject { id, field, value }))
                .collect();
            events.push(ProjectEvent::SaveProject(id));
            events
        }
        ProjectOperation::Delete { id } => vec![ProjectEvent::DeleteProject(id)],
        ProjectOperation::Deps(DepsOperation::Set {
            index,
            team,
            tech_team,
        }) => {
            let edits = [
                (DependencyField::Team, team),
                (DependencyField::TechTeam, tech_team),
            ];
            let mut events: Vec<_> = edits
                .into_iter()
                .filter_map(|(field, value)| {
                    value.map(|value| ProjectEvent::EditDependency { index, field, value })
                })
                .collect();
            events.push(ProjectEvent::SaveDependencies);
            events
        }
    }
}
