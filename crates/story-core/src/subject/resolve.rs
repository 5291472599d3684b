use super::handler::Handler;
use super::types::SubjectType;
use crate::errors::StoryError;
use crate::sentence::Keyword;

/// Busca el handler de `keyword` cuya clave coincide con `template_key`.
///
/// Recorre los layers del más cercano al más lejano y, dentro de cada uno,
/// en orden de declaración. Si no hay coincidencia el error refleja la
/// keyword de la oración, no el layer donde terminó la búsqueda.
pub fn resolve<'a, S: 'static>(subject: &'a SubjectType<S>,
                               keyword: Keyword,
                               template_key: &str)
                               -> Result<&'a Handler<S>, StoryError> {
    subject.layers()
           .iter()
           .flat_map(|layer| layer.handlers().iter())
           .find(|h| h.matches(keyword, template_key))
           .ok_or_else(|| not_found(keyword, template_key))
}

pub(crate) fn not_found(keyword: Keyword, template_key: &str) -> StoryError {
    let template = template_key.to_string();
    match keyword {
        Keyword::Given => StoryError::GivenNotFound { template },
        Keyword::When => StoryError::WhenNotFound { template },
        Keyword::Then => StoryError::ThenNotFound { template },
    }
}
