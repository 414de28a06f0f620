// RecipeKernel - every collaborator the action handlers talk to
//
// Held behind trait objects so front-ends and tests can swap implementations.

use std::sync::Arc;

use super::{
    BaseDialogService, BaseNavigator, BaseNotifier, BaseRecipeStore, BaseTranslator,
    BaseUserSource,
};

pub struct RecipeKernel {
    pub users: Arc<dyn BaseUserSource>,
    pub store: Arc<dyn BaseRecipeStore>,
    pub dialogs: Arc<dyn BaseDialogService>,
    pub notifier: Arc<dyn BaseNotifier>,
    pub navigator: Arc<dyn BaseNavigator>,
    pub translator: Arc<dyn BaseTranslator>,
}

impl RecipeKernel {
    pub fn new(
        users: Arc<dyn BaseUserSource>,
        store: Arc<dyn BaseRecipeStore>,
        dialogs: Arc<dyn BaseDialogService>,
        notifier: Arc<dyn BaseNotifier>,
        navigator: Arc<dyn BaseNavigator>,
        translator: Arc<dyn BaseTranslator>,
    ) -> Self {
        Self {
            users,
            store,
            dialogs,
            notifier,
            navigator,
            translator,
        }
    }
}
