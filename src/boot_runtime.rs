use std::cell::RefCell;
use std::rc::Rc;

use glassfx_core::BootPhase;

thread_local! {
    static BOOT_PHASE: RefCell<BootPhase> = RefCell::new(BootPhase::ColdStart);
    static PHASE_HOOKS: RefCell<Vec<(u64, Rc<dyn Fn(BootPhase)>)>> = RefCell::new(Vec::new());
    static NEXT_HOOK_ID: RefCell<u64> = RefCell::new(1);
}

pub fn boot_phase() -> BootPhase {
    BOOT_PHASE.with(|phase| *phase.borrow())
}

pub(crate) fn set_boot_phase(next: BootPhase) {
    let changed = BOOT_PHASE.with(|phase| {
        let mut phase = phase.borrow_mut();
        if *phase == next {
            return false;
        }
        *phase = next;
        true
    });
    if !changed {
        return;
    }
    let hooks: Vec<Rc<dyn Fn(BootPhase)>> =
        PHASE_HOOKS.with(|hooks| hooks.borrow().iter().map(|(_, hook)| hook.clone()).collect());
    gloo::console::log!("glassfx: phase", next.label());
    for hook in hooks {
        hook(next);
    }
}

pub fn add_boot_phase_hook(hook: Rc<dyn Fn(BootPhase)>) -> u64 {
    PHASE_HOOKS.with(|hooks| {
        let id = NEXT_HOOK_ID.with(|next| {
            let mut next = next.borrow_mut();
            let id = *next;
            *next = next.saturating_add(1);
            id
        });
        hooks.borrow_mut().push((id, hook));
        id
    })
}

pub fn remove_boot_phase_hook(id: u64) {
    PHASE_HOOKS.with(|hooks| {
        hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    });
}
