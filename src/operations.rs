use rand::{Rng, RngCore};

use crate::error::Fault;
use crate::state::State;

/// clear
pub fn clr(state: &mut State) {
    state.display.clear();
    state.advance();
}

/// PC = STACK.pop() + 2
pub fn rts(state: &mut State) -> Result<(), Fault> {
    let ret = state.stack.pop(state.pc)?;
    state.pc = ret.wrapping_add(0x2);
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<(), Fault> {
    state.stack.push(state.pc)?;
    state.pc = addr;
    Ok(())
}

/// if Vx == nn then pc += 2
pub fn ske(state: &mut State, x: usize, nn: u8) {
    let condition = state.v[x] == nn;
    state.skip_if(condition);
}

/// if Vx != nn then pc += 2
pub fn skne(state: &mut State, x: usize, nn: u8) {
    let condition = state.v[x] != nn;
    state.skip_if(condition);
}

/// Vx = nn
pub fn load(state: &mut State, x: usize, nn: u8) {
    state.v[x] = nn;
    state.advance();
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but implicitly drop it, VF is untouched
pub fn add(state: &mut State, x: usize, nn: u8) {
    state.v[x] = state.v[x].wrapping_add(nn);
    state.advance();
}

/// Vx = Vy
pub fn mv(state: &mut State, x: usize, y: usize) {
    state.v[x] = state.v[y];
    state.advance();
}

/// Vx |= Vy
pub fn or(state: &mut State, x: usize, y: usize) {
    state.v[x] |= state.v[y];
    state.advance();
}

/// Vx &= Vy
pub fn and(state: &mut State, x: usize, y: usize) {
    state.v[x] &= state.v[y];
    state.advance();
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: usize, y: usize) {
    state.v[x] ^= state.v[y];
    state.advance();
}

/// Vx += Vy; VF = overflow
/// Both operands are read before VF is written; if x is VF the sum lands last and wins.
pub fn addr(state: &mut State, x: usize, y: usize) {
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    state.set_flag(over);
    state.v[x] = res;
    state.advance();
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.v[x].overflowing_sub(state.v[y]);
    state.set_flag(!under);
    state.v[x] = res;
    state.advance();
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    state.advance();
}

/// Vx = rand_byte & nn
pub fn rand(state: &mut State, x: usize, nn: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.v[x] = rand_byte & nn;
    state.advance();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite stored at mem[I..I+n] onto the frame at (Vx, Vy) with wrapping.
/// VF is set if any pixel is erased and cleared otherwise.
pub fn draw(state: &mut State, x: usize, y: usize, n: u8) -> Result<(), Fault> {
    let sprite = state.memory.slice(state.i as usize, n as usize)?;
    let collision = state
        .display
        .draw_sprite(state.v[x] as usize, state.v[y] as usize, sprite);
    state.set_flag(collision);
    state.advance();
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: usize) -> Result<(), Fault> {
    let pressed = state.keypad.is_pressed(state.v[x])?;
    state.skip_if(pressed);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: usize) -> Result<(), Fault> {
    let pressed = state.keypad.is_pressed(state.v[x])?;
    state.skip_if(!pressed);
    Ok(())
}

/// Vx = DT
pub fn moved(state: &mut State, x: usize) {
    state.v[x] = state.timers.delay;
    state.advance();
}

/// DT = Vx
pub fn loads(state: &mut State, x: usize) {
    state.timers.delay = state.v[x];
    state.advance();
}

/// ST = Vx
pub fn ld(state: &mut State, x: usize) {
    state.timers.sound = state.v[x];
    state.advance();
}
